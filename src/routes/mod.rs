use actix_session::Session;
use actix_web::http::header;
use actix_web::HttpResponse;
use chrono::Utc;
use tera::{Context, Tera};

use crate::domain::notification::{Notification, NotificationSlot};
use crate::dto::employee::ModalState;

pub mod employee;
pub mod main;

pub(crate) const MODAL_SESSION_KEY: &str = "employee_modal";
pub(crate) const NOTIFICATION_SESSION_KEY: &str = "notification";

/// 303 redirect to `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template {name}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub(crate) fn load_modal(session: &Session) -> Option<ModalState> {
    session.get(MODAL_SESSION_KEY).ok().flatten()
}

pub(crate) fn store_modal(session: &Session, state: &ModalState) {
    if let Err(e) = session.insert(MODAL_SESSION_KEY, state) {
        log::error!("Failed to store dialog state: {e}");
    }
}

pub(crate) fn clear_modal(session: &Session) {
    session.remove(MODAL_SESSION_KEY);
}

pub(crate) fn load_slot(session: &Session) -> NotificationSlot {
    session
        .get(NOTIFICATION_SESSION_KEY)
        .ok()
        .flatten()
        .unwrap_or_default()
}

pub(crate) fn store_slot(session: &Session, slot: &NotificationSlot) {
    if let Err(e) = session.insert(NOTIFICATION_SESSION_KEY, slot) {
        log::error!("Failed to store notification slot: {e}");
    }
}

/// Publishes `notification` into the session's banner slot.
pub(crate) fn notify(session: &Session, notification: Notification) {
    let mut slot = load_slot(session);
    slot.publish(notification, Utc::now());
    store_slot(session, &slot);
}
