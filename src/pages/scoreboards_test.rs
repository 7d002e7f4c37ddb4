use super::*;

fn make_record() -> Scoreboard {
    Scoreboard {
        id: "sb-1".to_owned(),
        description: "Placar quadra 1".to_owned(),
        serial_number: "1234".to_owned(),
        static_token: "tok-1234".to_owned(),
    }
}

#[test]
fn save_success_text_depends_on_editor_mode() {
    assert_eq!(save_success_text(&Editor::Creating), "O placar foi criado com sucesso.");
    assert_eq!(
        save_success_text(&Editor::Editing(make_record())),
        "O placar foi atualizado com sucesso."
    );
}

#[test]
fn save_error_text_prefers_server_message() {
    let error = ApiError::Status {
        status: 422,
        message: Some("Identificador já cadastrado".to_owned()),
    };
    assert_eq!(save_error_text(&Editor::Creating, &error), "Identificador já cadastrado");
    assert_eq!(
        save_error_text(&Editor::Editing(make_record()), &error),
        "Identificador já cadastrado"
    );
}

#[test]
fn save_error_text_falls_back_per_mode() {
    let error = ApiError::Transport("connection refused".to_owned());
    assert_eq!(save_error_text(&Editor::Creating, &error), "Ocorreu um erro ao criar o placar.");
    assert_eq!(
        save_error_text(&Editor::Editing(make_record()), &error),
        "Ocorreu um erro ao atualizar o placar."
    );
}

#[test]
fn save_error_text_ignores_empty_server_message() {
    let error = ApiError::Status {
        status: 500,
        message: None,
    };
    assert_eq!(save_error_text(&Editor::Creating, &error), "Ocorreu um erro ao criar o placar.");
}
