mod alert;
mod button;
mod camera_view;
mod dialog;
mod spinner;
mod toast;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use camera_view::CameraView;
pub(crate) use dialog::ConfirmDialog;
pub(crate) use spinner::Spinner;
pub(crate) use toast::{ToastContext, ToastProvider, use_toasts};
