//! Fixed Russian UI strings, carried over from the source client

pub const WELCOME_TITLE: &str = "Генератор викторин с помощью ИИ";
pub const WELCOME_DESCRIPTION: &str = "Добро пожаловать! Этот веб-сайт позволяет создавать викторины с помощью искусственного интеллекта. Аудитория: от 7 до 11 класса. Можно проводить соревнования между командами.";

pub const TEAM_SETUP_TITLE: &str = "Настройка команды";
pub const TEAM_NAME_LABEL: &str = "Название команды";
pub const TEAM_MEMBERS_LABEL: &str = "Участники команды (через запятую)";
pub const CURATOR_LABEL: &str = "Куратор";
pub const CLASS_LABEL: &str = "Класс участников";
pub const TOPIC_LABEL: &str = "Выбор темы";

pub const QUIZ_TITLE: &str = "Викторина";
pub const QUESTION_TIMER: &str = "Время на вопрос: ";
pub const RESULTS_TITLE: &str = "Результаты";
pub const LOADING_TEXT: &str = "Загрузка вопросов...";
pub const ERROR_TEXT: &str = "Произошла ошибка при загрузке вопросов.";

pub const BACK_HINT: &str = "назад";
pub const QUIT_HINT: &str = "выход";
