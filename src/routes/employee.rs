use actix_session::Session;
use actix_web::{Responder, post, web};
use log::error;

use crate::domain::notification::Notification;
use crate::domain::validation::ValidationErrorMap;
use crate::dto::employee::{ModalState, SubmitOutcome};
use crate::forms::employee::EmployeeForm;
use crate::generator::EmployeeGenerator;
use crate::repository::sheet::SheetRepository;
use crate::routes::{clear_modal, load_modal, notify, redirect, store_modal};
use crate::services::employee as employee_service;

#[post("/employee/open")]
pub async fn open_employee(session: Session) -> impl Responder {
    // A fresh draft every time the dialog opens.
    store_modal(&session, &ModalState::open());
    redirect("/")
}

#[post("/employee/close")]
pub async fn close_employee(session: Session) -> impl Responder {
    clear_modal(&session);
    redirect("/")
}

#[post("/employee/save")]
pub async fn save_employee(
    repo: web::Data<SheetRepository>,
    session: Session,
    web::Form(form): web::Form<EmployeeForm>,
) -> impl Responder {
    let current_tab = load_modal(&session).map(|m| m.active_tab).unwrap_or_default();

    match employee_service::submit_employee(repo.get_ref(), form).await {
        SubmitOutcome::Invalid { draft, errors, tab } => {
            store_modal(
                &session,
                &ModalState {
                    draft,
                    errors,
                    active_tab: tab.unwrap_or(current_tab),
                },
            );
            notify(&session, Notification::warning("⚠️ Vui lòng kiểm tra lại dữ liệu!"));
        }
        SubmitOutcome::Saved => {
            clear_modal(&session);
            notify(&session, Notification::success("✔ Đã lưu dữ liệu thành công!"));
        }
        SubmitOutcome::Failed { draft } => {
            store_modal(
                &session,
                &ModalState {
                    draft,
                    errors: ValidationErrorMap::default(),
                    active_tab: current_tab,
                },
            );
            notify(&session, Notification::error("❌ Lỗi khi lưu dữ liệu!"));
        }
    }

    redirect("/")
}

/// Fills the open dialog's draft from the configured generator. A generation
/// failure leaves the draft untouched and is only logged.
#[post("/employee/generate")]
pub async fn generate_employee(
    generator: web::Data<EmployeeGenerator>,
    session: Session,
) -> impl Responder {
    if let Some(state) = load_modal(&session) {
        match employee_service::generate_employee(generator.get_ref()).await {
            Ok(draft) => {
                store_modal(
                    &session,
                    &ModalState {
                        draft,
                        errors: ValidationErrorMap::default(),
                        active_tab: state.active_tab,
                    },
                );
            }
            Err(e) => {
                error!("Failed to generate employee record: {e}");
            }
        }
    }

    redirect("/")
}
