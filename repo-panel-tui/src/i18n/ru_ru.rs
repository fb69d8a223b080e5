//! 俄文翻译 (ru-RU)

use super::keys::{
    AddRepositoryTexts, CommonTexts, ConfirmDeleteTexts, EditLinkTexts, HintTexts, HomeTexts,
    JiraLoginTexts, ModalTexts, NoticeTexts, ProjectPickerTexts, RepositoryTexts, SessionTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Repo Panel",
        loading: "Загрузка...",
        not_found: "Страница не найдена",
        cancel: "Отмена",
        save: "Сохранить",
        delete: "Удалить",
        back: "Назад",
        quit: "Выход",
        offline: "демо-режим",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        select: "Выбор",
        open: "Открыть",
        add: "Добавить",
        edit_link: "Изменить проект",
        delete: "Удалить",
        login: "Вход в Jira",
        logout: "Выйти",
        refresh: "Обновить",
        switch_table: "Сменить таблицу",
        scroll: "Прокрутка",
        back: "Назад",
        quit: "Выход",
        next_field: "Далее",
        choose: "Выбрать",
        confirm: "Подтвердить",
        show_secret: "Показать пароль",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    home: HomeTexts {
        title: "Репозитории",
        add_tile: "+ добавить репозиторий",
        add_tile_hint: "Enter или Alt+a",
        unlinked: "без проекта Jira",
        avatar_pending: "…",
        deleting: "удаление…",
    },

    session: SessionTexts {
        authorized: "Jira: авторизован",
        not_authorized: "Jira: не авторизован",
        status_error: "Jira: ошибка статуса",
        login: "🔑 Авторизация в Jira",
        logout: "Выйти из Jira",
    },

    repository: RepositoryTexts {
        default_title: "Репозиторий",
        commits: "Коммиты",
        merge_candidates: "Кандидаты на merge",
        col_hash: "Хеш",
        col_author: "Автор",
        col_date: "Дата",
        col_message: "Сообщение",
        no_commits: "Коммитов нет",
        no_merge_candidates: "Кандидатов на merge нет",
        commits_failed: "Ошибка загрузки коммитов",
        merge_candidates_failed: "Ошибка загрузки кандидатов на merge",
    },

    // ========================================================================
    // 弹窗文本
    // ========================================================================
    modal: ModalTexts {
        add_repository: AddRepositoryTexts {
            title: "Добавить репозиторий",
            path: "Путь к репозиторию",
            path_placeholder: "/путь/к/репозиторию",
            fields_required: "Заполните все поля!",
        },
        edit_link: EditLinkTexts {
            title: "Изменить проект Jira",
            repository: "Репозиторий",
            project_required: "Выберите проект",
        },
        jira_login: JiraLoginTexts {
            title: "Авторизация в Jira",
            server: "Сервер",
            server_placeholder: "your-company.atlassian.net",
            username: "Логин / e-mail",
            password: "Пароль / API токен",
            fields_required: "Заполните все поля",
        },
        confirm_delete: ConfirmDeleteTexts {
            title: "Удалить репозиторий",
            message: "Удалить репозиторий?",
        },
        project_picker: ProjectPickerTexts {
            label: "Проект Jira",
            loading: "Загрузка проектов...",
            empty: "Нет проектов (сначала войдите в Jira)",
            load_failed: "Ошибка загрузки проектов Jira",
        },
        submitting: "Сохранение...",
    },

    // ========================================================================
    // 状态栏通知
    // ========================================================================
    notice: NoticeTexts {
        repository_added: "Репозиторий добавлен!",
        link_updated: "Проект Jira обновлён",
        repository_deleted: "Репозиторий удалён",
        delete_failed: "Ошибка удаления",
        delete_in_progress: "Удаление уже выполняется",
        list_failed: "Ошибка получения репозиториев",
        jira_saved: "Данные Jira сохранены",
        logged_out: "Выход из Jira выполнен",
        logout_failed: "Не удалось выйти из Jira",
        refreshing: "Обновление...",
    },
};
