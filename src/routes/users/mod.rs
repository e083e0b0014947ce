mod dialogs;
mod list;

pub(crate) use list::UsersListPage;
