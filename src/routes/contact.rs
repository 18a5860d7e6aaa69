use rocket::form::Form;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::State;

use crate::config::SiteConfig;
use crate::contact::{self, ContactForm, ContactSubmission};
use crate::layout;
use crate::mail::{ContactMail, Mailer, SEND_FAILED_MESSAGE};

const CONFIRMATION_PATH: &str = "/send-completely.html";

#[derive(Responder)]
pub enum MailOutcome {
    Sent(Redirect),
    Invalid((Status, RawHtml<String>)),
    Failed(String),
}

async fn bridge(mailer: &Mailer, mail: &ContactMail) -> MailOutcome {
    match mailer.dispatch(mail).await {
        Ok(()) => MailOutcome::Sent(Redirect::to(CONFIRMATION_PATH)),
        Err(_) => MailOutcome::Failed(SEND_FAILED_MESSAGE.to_string()),
    }
}

#[get("/contact")]
pub fn contact_page(config: &State<SiteConfig>) -> RawHtml<String> {
    let body = contact::render_form(&ContactForm::default(), &[]);
    RawHtml(layout::render_page(config, "/contact", "CONTACT", &body))
}

/// Validate the contact form, then hand it to the mail bridge.
#[post("/contact", data = "<form>")]
pub async fn contact_submit(
    config: &State<SiteConfig>,
    mailer: &State<Mailer>,
    form: Form<ContactSubmission>,
) -> MailOutcome {
    let values = ContactForm::from(&*form);
    match contact::validate(&values) {
        Ok(mail) => bridge(mailer, &mail).await,
        Err(errors) => {
            let body = contact::render_form(&values, &errors);
            MailOutcome::Invalid((
                Status::UnprocessableEntity,
                RawHtml(layout::render_page(config, "/contact", "CONTACT", &body)),
            ))
        }
    }
}

/// Raw form-to-mail bridge. Fields are passed through as posted.
#[post("/send-mail", data = "<form>")]
pub async fn send_mail(mailer: &State<Mailer>, form: Form<ContactSubmission>) -> MailOutcome {
    let mail = ContactMail {
        name: form.name.clone().unwrap_or_default(),
        email: form.email.clone().unwrap_or_default(),
        message: form.contact.clone().unwrap_or_default(),
    };
    bridge(mailer, &mail).await
}

pub fn routes() -> Vec<rocket::Route> {
    routes![contact_page, contact_submit, send_mail]
}
