//! The contact form: validation, body composition and the webmail compose
//! link.
//!
//! Submission never posts anywhere. The handler validates the required
//! fields, composes a plain-text body, and opens a pre-filled webmail
//! compose URL in a new browsing context after a short confirmation pause.
//! Delivery depends entirely on the visitor's mail client.

use thiserror::Error;
use tracing::debug;

use crate::config::{ContactFormConfig, COMPOSE_DELAY_MS, CONFIRMATION_HIDE_DELAY_MS};
use crate::dom::{Dom, TimerHandle};
use crate::event::{TimerTask, UiEvent};
use crate::page::{Controller, PageContext};

/// Alert shown when a required field is empty.
const REQUIRED_FIELDS_ALERT: &str = "Por favor, complete todos los campos obligatorios.";

/// Field values read from the form at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
    /// Machine value of the selected subject option, used for validation.
    pub subject_value: String,
    /// Human-readable label of the selected subject option, used in the
    /// composed mail.
    pub subject_label: String,
    pub message: String,
    /// Optional; an empty string when the visitor leaves it blank.
    pub organization: String,
}

/// Validation failure for a submission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("required field `{field}` is empty")]
    MissingField { field: &'static str },
}

/// A composed mail: the subject, the plain-text body, and the compose URL
/// carrying both as query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedMail {
    pub subject: String,
    pub body: String,
    pub url: String,
}

/// Validate a snapshot and build the webmail compose URL.
///
/// Percent-decoding the URL's `su` and `body` parameters reproduces the
/// returned subject and body exactly.
pub fn compose_mail(snapshot: &FormSnapshot, recipient: &str) -> Result<ComposedMail, FormError> {
    let required: [(&'static str, &str); 4] = [
        ("nombre", &snapshot.name),
        ("correo", &snapshot.email),
        ("asunto", &snapshot.subject_value),
        ("mensaje", &snapshot.message),
    ];
    for (field, value) in required {
        if value.is_empty() {
            return Err(FormError::MissingField { field });
        }
    }

    let subject = if snapshot.subject_label.is_empty() {
        snapshot.subject_value.clone()
    } else {
        snapshot.subject_label.clone()
    };
    let body = format!(
        "Nombre: {}\nCorreo: {}\nMunicipalidad: {}\nAsunto: {}\n\nMensaje:\n{}",
        snapshot.name, snapshot.email, snapshot.organization, subject, snapshot.message,
    );
    let url = format!(
        "https://mail.google.com/mail/?view=cm&fs=1&to={}&su={}&body={}",
        recipient,
        urlencoding::encode(&subject),
        urlencoding::encode(&body),
    );

    Ok(ComposedMail { subject, body, url })
}

/// Intercepts submission, validates, then runs the two-stage confirmation
/// sequence: show the confirmation at once, open the compose URL and reset
/// the form after one second, hide the confirmation five seconds later.
/// Both timers are keyed to this controller: a resubmission cancels
/// whatever is still pending, so exactly one compose URL (the latest)
/// opens.
pub(crate) struct ContactController<D: Dom> {
    form: D::Element,
    confirmation: Option<D::Element>,
    config: ContactFormConfig,
    pending_url: Option<String>,
    compose_task: Option<TimerHandle>,
    hide_task: Option<TimerHandle>,
}

impl<D: Dom> ContactController<D> {
    pub(crate) fn install(dom: &D, config: &ContactFormConfig) -> Option<Self> {
        let form = match dom.element_by_id(&config.form_id) {
            Some(form) => form,
            None => {
                debug!(id = %config.form_id, "contact form absent on this page");
                return None;
            }
        };
        Some(Self {
            form,
            confirmation: dom.element_by_id(&config.confirmation_id),
            config: config.clone(),
            pending_url: None,
            compose_task: None,
            hide_task: None,
        })
    }

    fn read_field(&self, dom: &D, id: &str) -> String {
        dom.element_by_id(id)
            .map(|el| dom.field_value(&el))
            .unwrap_or_default()
    }

    fn snapshot(&self, dom: &D) -> FormSnapshot {
        let subject_label = dom
            .element_by_id(&self.config.subject_id)
            .and_then(|el| dom.selected_option_label(&el))
            .unwrap_or_default();
        FormSnapshot {
            name: self.read_field(dom, &self.config.name_id),
            email: self.read_field(dom, &self.config.email_id),
            subject_value: self.read_field(dom, &self.config.subject_id),
            subject_label,
            message: self.read_field(dom, &self.config.message_id),
            organization: self.read_field(dom, &self.config.organization_id),
        }
    }

    fn cancel_pending(&mut self, dom: &D) {
        for handle in [self.compose_task.take(), self.hide_task.take()]
            .into_iter()
            .flatten()
        {
            dom.cancel(handle);
        }
    }

    fn submit(&mut self, ctx: &mut PageContext<'_, D>) {
        let snapshot = self.snapshot(ctx.dom);
        let mail = match compose_mail(&snapshot, &self.config.recipient) {
            Ok(mail) => mail,
            Err(err) => {
                debug!(%err, "contact form rejected");
                ctx.dom.alert(REQUIRED_FIELDS_ALERT);
                return;
            }
        };

        if let Some(confirmation) = &self.confirmation {
            ctx.dom.set_style(confirmation, "display", "block");
        }
        self.cancel_pending(ctx.dom);
        self.pending_url = Some(mail.url);
        self.compose_task = Some(ctx.dom.schedule(TimerTask::OpenCompose, COMPOSE_DELAY_MS));
    }

    fn open_compose(&mut self, ctx: &mut PageContext<'_, D>) {
        self.compose_task = None;
        let Some(url) = self.pending_url.take() else {
            return;
        };
        ctx.dom.open_in_new_context(&url);
        ctx.dom.reset_form(&self.form);
        if self.confirmation.is_some() {
            self.hide_task = Some(
                ctx.dom
                    .schedule(TimerTask::HideConfirmation, CONFIRMATION_HIDE_DELAY_MS),
            );
        }
    }

    fn hide_confirmation(&mut self, ctx: &mut PageContext<'_, D>) {
        self.hide_task = None;
        if let Some(confirmation) = &self.confirmation {
            ctx.dom.set_style(confirmation, "display", "none");
        }
    }
}

impl<D: Dom> Controller<D> for ContactController<D> {
    fn handle(&mut self, event: &UiEvent<D::Element>, ctx: &mut PageContext<'_, D>) {
        match event {
            UiEvent::FormSubmit => self.submit(ctx),
            UiEvent::TimerFired(TimerTask::OpenCompose) => self.open_compose(ctx),
            UiEvent::TimerFired(TimerTask::HideConfirmation) => self.hide_confirmation(ctx),
            _ => {}
        }
    }
}

/// Percent-decode a query parameter's value out of a compose URL. Test
/// helper for the round-trip property; tolerant of the value being last.
#[cfg(any(test, feature = "testing"))]
pub fn query_param<'a>(url: &'a str, name: &str) -> Option<std::borrow::Cow<'a, str>> {
    let (_, query) = url.split_once('?')?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| urlencoding::decode(value).ok())?
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> FormSnapshot {
        FormSnapshot {
            name: "Ana Pérez".into(),
            email: "ana@example.com".into(),
            subject_value: "soporte".into(),
            subject_label: "Soporte técnico".into(),
            message: "Necesito ayuda con el módulo de archivo.".into(),
            organization: "Municipalidad de Rosario".into(),
        }
    }

    #[test]
    fn every_required_field_is_enforced() {
        for field in ["nombre", "correo", "asunto", "mensaje"] {
            let mut s = snapshot();
            match field {
                "nombre" => s.name.clear(),
                "correo" => s.email.clear(),
                "asunto" => s.subject_value.clear(),
                "mensaje" => s.message.clear(),
                _ => unreachable!(),
            }
            assert_eq!(
                compose_mail(&s, "rs.siamsoft@gmail.com"),
                Err(FormError::MissingField { field }),
            );
        }
    }

    #[test]
    fn organization_is_optional() {
        let mut s = snapshot();
        s.organization.clear();
        assert!(compose_mail(&s, "rs.siamsoft@gmail.com").is_ok());
    }

    #[test]
    fn body_lists_every_field() {
        let mail = compose_mail(&snapshot(), "rs.siamsoft@gmail.com").unwrap();
        assert_eq!(
            mail.body,
            "Nombre: Ana Pérez\n\
             Correo: ana@example.com\n\
             Municipalidad: Municipalidad de Rosario\n\
             Asunto: Soporte técnico\n\n\
             Mensaje:\nNecesito ayuda con el módulo de archivo."
        );
    }

    #[test]
    fn url_parameters_decode_back_to_subject_and_body() {
        let mail = compose_mail(&snapshot(), "rs.siamsoft@gmail.com").unwrap();
        assert!(mail
            .url
            .starts_with("https://mail.google.com/mail/?view=cm&fs=1&to=rs.siamsoft@gmail.com&su="));
        assert_eq!(query_param(&mail.url, "su").unwrap(), mail.subject);
        assert_eq!(query_param(&mail.url, "body").unwrap(), mail.body);
    }

    #[test]
    fn awkward_characters_survive_the_round_trip() {
        let mut s = snapshot();
        s.message = "50% + 50% = 100% & más…\n¿seguro? #sí".into();
        let mail = compose_mail(&s, "rs.siamsoft@gmail.com").unwrap();
        assert_eq!(query_param(&mail.url, "body").unwrap(), mail.body);
    }

    #[test]
    fn subject_label_falls_back_to_value() {
        let mut s = snapshot();
        s.subject_label.clear();
        let mail = compose_mail(&s, "rs.siamsoft@gmail.com").unwrap();
        assert_eq!(mail.subject, "soporte");
        assert!(mail.body.contains("Asunto: soporte\n"));
    }
}
