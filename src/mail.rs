use std::sync::Arc;

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::{info, warn};

use crate::config::MailSettings;

pub const MAIL_SUBJECT: &str = "ウェブサイトからのお問い合わせ";

/// Plain-text body returned by the bridge when a message could not be sent.
pub const SEND_FAILED_MESSAGE: &str = "メールの送信に失敗しました。もう一度お試しください。";

/// One contact-form message on its way to the site owner.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactMail {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMail {
    pub fn body(&self) -> String {
        format!(
            "お名前: {}\nメールアドレス: {}\n内容:\n{}\n",
            self.name, self.email, self.message
        )
    }
}

#[rocket::async_trait]
pub trait MailTransport: Send + Sync {
    async fn deliver(&self, mail: &ContactMail) -> Result<(), String>;
}

/// Managed state handed to the contact routes.
#[derive(Clone)]
pub struct Mailer(pub Arc<dyn MailTransport>);

impl Mailer {
    pub fn new<T: MailTransport + 'static>(transport: T) -> Self {
        Mailer(Arc::new(transport))
    }

    /// Send one message, logging the outcome. No retry.
    pub async fn dispatch(&self, mail: &ContactMail) -> Result<(), String> {
        match self.0.deliver(mail).await {
            Ok(()) => {
                info!("[mail] Contact message from {} delivered", mail.email);
                Ok(())
            }
            Err(e) => {
                warn!("[mail] Failed to deliver contact message from {}: {}", mail.email, e);
                Err(e)
            }
        }
    }
}

/// SMTP relay with STARTTLS and credentials.
pub struct SmtpMailer {
    settings: MailSettings,
}

impl SmtpMailer {
    pub fn new(settings: MailSettings) -> Self {
        SmtpMailer { settings }
    }

    fn build_message(&self, mail: &ContactMail) -> Result<Message, String> {
        Message::builder()
            .from(
                self.settings
                    .sender()
                    .parse()
                    .map_err(|e| format!("Invalid from address: {}", e))?,
            )
            .reply_to(
                mail.email
                    .parse()
                    .map_err(|e| format!("Invalid reply-to address: {}", e))?,
            )
            .to(self
                .settings
                .to
                .parse()
                .map_err(|e| format!("Invalid to address: {}", e))?)
            .subject(MAIL_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body())
            .map_err(|e| format!("Failed to build email: {}", e))
    }
}

#[rocket::async_trait]
impl MailTransport for SmtpMailer {
    async fn deliver(&self, mail: &ContactMail) -> Result<(), String> {
        if !self.settings.is_configured() {
            return Err("SMTP host, username or recipient not configured".into());
        }

        let email = self.build_message(mail)?;

        let creds = Credentials::new(
            self.settings.smtp_username.clone(),
            self.settings.smtp_password.clone(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.settings.smtp_host)
            .map_err(|e| format!("SMTP relay error: {}", e))?
            .port(self.settings.smtp_port)
            .credentials(creds)
            .build();

        transport
            .send(email)
            .await
            .map_err(|e| format!("SMTP send error: {}", e))?;
        Ok(())
    }
}
