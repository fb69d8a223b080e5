mod detail;
mod home;
mod modal;

pub use detail::{CommitTable, DetailState, DetailTable};
pub use home::{AvatarSlot, HomeState, RepoCard, Tile};
pub use modal::{
    Modal, ModalState, ProjectPicker, ADD_FIELD_COUNT, ADD_FIELD_PATH, ADD_FIELD_PROJECT,
    DELETE_FOCUS_CANCEL, DELETE_FOCUS_CONFIRM, LOGIN_FIELD_COUNT, LOGIN_FIELD_PASSWORD,
    LOGIN_FIELD_SERVER, LOGIN_FIELD_USERNAME,
};
