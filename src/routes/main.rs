use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use chrono::Utc;
use log::error;
use serde::Deserialize;
use serde_json::json;
use tera::{Context, Tera};

use crate::domain::department::DEPARTMENTS;
use crate::domain::employee::{EmployeeStatus, Gender};
use crate::repository::sheet::SheetRepository;
use crate::routes::{load_modal, load_slot, render_template, store_slot};
use crate::services::employee as employee_service;

#[get("/")]
pub async fn show_index(
    repo: web::Data<SheetRepository>,
    session: Session,
    tera: web::Data<Tera>,
) -> impl Responder {
    // The collection is whatever the last successful fetch returned; a
    // failed or malformed read degrades to the empty state.
    let employees = match employee_service::list_employees(repo.get_ref()).await {
        Ok(employees) => employees,
        Err(e) => {
            error!("Failed to list employees: {e}");
            Vec::new()
        }
    };

    let now = Utc::now();
    let mut slot = load_slot(&session);
    slot.expire_due(now);
    let notification = slot.current().map(|active| {
        json!({
            "level": active.notification.level.as_str(),
            "text": active.notification.text,
            "token": active.token,
            "remaining_ms": active.remaining_ms(now),
        })
    });
    store_slot(&session, &slot);

    let mut context = Context::new();
    context.insert("current_page", "employees");
    context.insert("employees", &employees);
    context.insert("departments", &DEPARTMENTS);
    context.insert("genders", &Gender::ALL);
    context.insert("statuses", &EmployeeStatus::ALL);
    context.insert("modal", &load_modal(&session));
    context.insert("notification", &notification);

    render_template(&tera, "main/index.html", &context)
}

#[derive(Deserialize)]
pub struct ExpireNotificationForm {
    pub token: u64,
}

/// Auto-dismiss callback from the banner timer. Stale tokens are ignored so
/// a timer armed for a superseded message cannot clear a newer one.
#[post("/notification/expire")]
pub async fn expire_notification(
    session: Session,
    web::Form(form): web::Form<ExpireNotificationForm>,
) -> impl Responder {
    let mut slot = load_slot(&session);
    slot.expire(form.token);
    store_slot(&session, &slot);
    HttpResponse::NoContent().finish()
}
