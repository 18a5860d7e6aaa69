use std::sync::OnceLock;

use regex::Regex;

use crate::mail::ContactMail;
use crate::render::html_escape;

/// Raw contact form fields as posted. Missing fields are `None`.
#[derive(Debug, Default, FromForm)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub checkbox: bool,
}

/// Trimmed form values, kept so an invalid form can be shown again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub agree: bool,
}

impl From<&ContactSubmission> for ContactForm {
    fn from(s: &ContactSubmission) -> Self {
        let trimmed = |v: &Option<String>| v.as_deref().unwrap_or("").trim().to_string();
        ContactForm {
            name: trimmed(&s.name),
            email: trimmed(&s.email),
            contact: trimmed(&s.contact),
            agree: s.checkbox,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Contact,
    Checkbox,
}

impl ContactField {
    pub fn id(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Contact => "contact",
            ContactField::Checkbox => "checkbox",
        }
    }

    pub fn error_id(&self) -> &'static str {
        match self {
            ContactField::Name => "nameError",
            ContactField::Email => "emailError",
            ContactField::Contact => "contactError",
            ContactField::Checkbox => "checkError",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]{1,64}(@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})$")
            .expect("email pattern compiles")
    })
}

/// Local part of 1–64 safe characters, then an `@domain.tld` part that is
/// itself 5–319 characters long.
pub fn is_valid_email(email: &str) -> bool {
    match email_pattern().captures(email) {
        Some(caps) => {
            let domain_len = caps.get(1).map(|m| m.as_str().chars().count()).unwrap_or(0);
            (5..=319).contains(&domain_len)
        }
        None => false,
    }
}

/// Check every field; each failing field reports exactly one message.
pub fn validate(form: &ContactForm) -> Result<ContactMail, Vec<FieldError>> {
    let mut errors = Vec::new();

    if form.name.is_empty() {
        errors.push(FieldError {
            field: ContactField::Name,
            message: "お名前を入力してください。",
        });
    }

    if form.email.is_empty() {
        errors.push(FieldError {
            field: ContactField::Email,
            message: "メールアドレスを入力してください。",
        });
    } else if !is_valid_email(&form.email) {
        errors.push(FieldError {
            field: ContactField::Email,
            message: "正しいメールアドレスの形式で入力してください。",
        });
    }

    if form.contact.is_empty() {
        errors.push(FieldError {
            field: ContactField::Contact,
            message: "内容を入力してください。",
        });
    }

    if !form.agree {
        errors.push(FieldError {
            field: ContactField::Checkbox,
            message: "「同意する」をチェックしてください。",
        });
    }

    if errors.is_empty() {
        Ok(ContactMail {
            name: form.name.clone(),
            email: form.email.clone(),
            message: form.contact.clone(),
        })
    } else {
        Err(errors)
    }
}

// ── Rendering ──────────────────────────────────────────

/// Contact form with per-field messages under each input.
pub fn render_form(form: &ContactForm, errors: &[FieldError]) -> String {
    let error_for = |field: ContactField| -> String {
        match errors.iter().find(|e| e.field == field) {
            Some(e) => format!(
                r#"<p id="{}" class="error-message" role="alert" style="display: block;">{}</p>"#,
                field.error_id(),
                e.message
            ),
            None => format!(
                r#"<p id="{}" class="error-message" style="display: none;"></p>"#,
                field.error_id()
            ),
        }
    };
    let invalid = |field: ContactField| -> &'static str {
        if errors.iter().any(|e| e.field == field) {
            r#" aria-invalid="true""#
        } else {
            ""
        }
    };

    format!(
        r#"<section class="contact">
<h1 class="contact-title">CONTACT</h1>
<form class="form" method="post" action="/contact" novalidate>
<div class="form-item"><label for="name">お名前</label><input type="text" id="name" name="name" value="{name}"{name_invalid}>{name_error}</div>
<div class="form-item"><label for="email">メールアドレス</label><input type="email" id="email" name="email" value="{email}"{email_invalid}>{email_error}</div>
<div class="form-item"><label for="contact">内容</label><textarea id="contact" name="contact" rows="8"{contact_invalid}>{contact}</textarea>{contact_error}</div>
<div class="form-item form-check"><label><input type="checkbox" id="checkbox" name="checkbox"{checked}{check_invalid}> 同意する</label>{check_error}</div>
<button type="submit" class="form-submit">送信する</button>
</form>
</section>"#,
        name = html_escape(&form.name),
        name_invalid = invalid(ContactField::Name),
        name_error = error_for(ContactField::Name),
        email = html_escape(&form.email),
        email_invalid = invalid(ContactField::Email),
        email_error = error_for(ContactField::Email),
        contact = html_escape(&form.contact),
        contact_invalid = invalid(ContactField::Contact),
        contact_error = error_for(ContactField::Contact),
        checked = if form.agree { " checked" } else { "" },
        check_invalid = invalid(ContactField::Checkbox),
        check_error = error_for(ContactField::Checkbox),
    )
}

pub fn render_sent() -> String {
    r#"<section class="contact contact-sent">
<h1 class="contact-title">送信完了</h1>
<p>お問い合わせありがとうございました。内容を確認のうえ、ご連絡いたします。</p>
<p><a href="/">トップページへ戻る</a></p>
</section>"#
        .to_string()
}
