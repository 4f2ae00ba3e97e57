//! User-visible strings

pub const ACTIVITIES_HEADING: &str = "Atividades Disponíveis";
pub const SIGNUP_HEADING: &str = "Inscrever-se em uma Atividade";

pub const LOADING: &str = "Carregando atividades...";
pub const LOAD_FAILED: &str = "Falha ao carregar atividades. Por favor, tente novamente mais tarde.";

pub const PARTICIPANTS_TITLE: &str = "Participantes:";
pub const NO_PARTICIPANTS: &str = "Nenhum participante inscrito ainda.";
pub const SCHEDULE_LABEL: &str = "Agenda:";
pub const AVAILABILITY_LABEL: &str = "Disponibilidade:";

pub const SELECT_PLACEHOLDER: &str = "-- Selecione uma atividade --";
pub const EMAIL_LABEL: &str = "Email do estudante:";
pub const EMAIL_PLACEHOLDER: &str = "seu-email@mergington.edu";
pub const ACTIVITY_LABEL: &str = "Atividade:";
pub const SIGNUP_BUTTON: &str = "Inscrever-se";

pub const SIGNUP_REJECTED: &str = "Ocorreu um erro";
pub const SIGNUP_FAILED: &str = "Falha na inscrição. Por favor, tente novamente.";

pub const REMOVE_REJECTED: &str = "Erro ao remover participante.";
pub const REMOVE_FAILED: &str = "Falha ao remover participante.";
pub const REMOVE_TITLE: &str = "Remover participante";
pub const REMOVE_GLYPH: &str = "🗑️";

pub fn spots_available(spots_left: i64) -> String {
    format!("{} vagas disponíveis", spots_left)
}

pub fn confirm_removal(email: &str, activity: &str) -> String {
    format!("Remover {} de {}?", email, activity)
}
