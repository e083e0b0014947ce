//! One-shot load of the attendance log into whatever view is mounted.

use super::types::AttendanceRecord;
use crate::app_lib::{AppError, Outcome};
use tracing::{debug, warn};

pub const FETCH_FAILED: &str = "Failed to fetch attendance records";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RecordsState {
    #[default]
    Loading,
    Loaded(Vec<AttendanceRecord>),
    Failed,
}

pub trait RecordsApi {
    async fn list(&self) -> Result<Vec<AttendanceRecord>, AppError>;
}

/// Where the loader writes its state. `try_set` returns `None` once the
/// view is gone.
pub trait RecordsView {
    fn try_set(&self, state: RecordsState) -> Option<()>;

    fn notify(&self, outcome: Outcome);
}

/// Fetches the log and publishes it. A result that arrives after the view
/// is gone is dropped along with its notification.
pub async fn load_records<A, V>(api: &A, view: &V) -> Result<(), AppError>
where
    A: RecordsApi,
    V: RecordsView,
{
    match api.list().await {
        Ok(records) => {
            debug!(count = records.len(), "attendance records loaded");
            view.try_set(RecordsState::Loaded(records));
            Ok(())
        }
        Err(err) => {
            warn!(error = %err, "attendance records fetch failed");
            if view.try_set(RecordsState::Failed).is_some() {
                view.notify(Outcome::failure(FETCH_FAILED));
            } else {
                debug!("view gone, dropping notification");
            }
            Err(err)
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use http::HttpRecordsApi;

#[cfg(target_arch = "wasm32")]
mod http {
    use super::RecordsApi;
    use crate::{
        app_lib::AppError,
        features::attendance::{client, types::AttendanceRecord},
    };

    #[derive(Clone, Debug)]
    pub struct HttpRecordsApi {
        token: Option<String>,
    }

    impl HttpRecordsApi {
        pub fn new(token: Option<String>) -> Self {
            Self { token }
        }
    }

    impl RecordsApi for HttpRecordsApi {
        async fn list(&self) -> Result<Vec<AttendanceRecord>, AppError> {
            client::list_records(self.token.as_deref()).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use std::cell::RefCell;

    struct FakeApi(Result<Vec<AttendanceRecord>, AppError>);

    impl RecordsApi for FakeApi {
        async fn list(&self) -> Result<Vec<AttendanceRecord>, AppError> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct FakeView {
        state: RefCell<Option<RecordsState>>,
        outcomes: RefCell<Vec<Outcome>>,
    }

    impl FakeView {
        fn mounted() -> Self {
            let view = Self::default();
            *view.state.borrow_mut() = Some(RecordsState::Loading);
            view
        }
    }

    impl RecordsView for FakeView {
        fn try_set(&self, state: RecordsState) -> Option<()> {
            self.state.borrow_mut().as_mut().map(|slot| *slot = state)
        }

        fn notify(&self, outcome: Outcome) {
            self.outcomes.borrow_mut().push(outcome);
        }
    }

    fn record() -> AttendanceRecord {
        AttendanceRecord {
            id: 1,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            last_attendance_date: NaiveDate::from_ymd_opt(2024, 5, 1).expect("date"),
            last_attendance_time: NaiveTime::from_hms_opt(9, 15, 2).expect("time"),
        }
    }

    fn server_error() -> AppError {
        AppError::Http {
            status: 500,
            message: "boom".into(),
        }
    }

    #[tokio::test]
    async fn loaded_records_replace_the_spinner() {
        let view = FakeView::mounted();
        load_records(&FakeApi(Ok(vec![record()])), &view).await.expect("load");

        assert_eq!(*view.state.borrow(), Some(RecordsState::Loaded(vec![record()])));
        assert!(view.outcomes.borrow().is_empty());
    }

    #[tokio::test]
    async fn failure_while_mounted_shows_one_toast() {
        let view = FakeView::mounted();
        let result = load_records(&FakeApi(Err(server_error())), &view).await;

        assert!(result.is_err());
        assert_eq!(*view.state.borrow(), Some(RecordsState::Failed));
        assert_eq!(*view.outcomes.borrow(), vec![Outcome::failure(FETCH_FAILED)]);
    }

    #[tokio::test]
    async fn failure_after_unmount_is_silent() {
        let view = FakeView::default();
        let result = load_records(&FakeApi(Err(server_error())), &view).await;

        assert!(result.is_err());
        assert_eq!(*view.state.borrow(), None);
        assert!(view.outcomes.borrow().is_empty());
    }
}
