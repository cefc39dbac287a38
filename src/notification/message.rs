//! Lead notification email composition.

use crate::domain::Lead;
use chrono::{DateTime, Utc};
use chrono_tz::America::Sao_Paulo;
use chrono_tz::Tz;

/// Local date and time at which a lead was captured.
///
/// Rendered the way a Brazilian reader expects (`dd/mm/yyyy`, 24-hour
/// clock) in São Paulo time, independent of the server's timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTime {
    local: DateTime<Tz>,
}

impl CaptureTime {
    pub fn new(captured_at: DateTime<Utc>) -> Self {
        Self {
            local: captured_at.with_timezone(&Sao_Paulo),
        }
    }

    /// Date as `dd/mm/yyyy`.
    pub fn date(&self) -> String {
        self.local.format("%d/%m/%Y").to_string()
    }

    /// Time as `HH:MM:SS`.
    pub fn time(&self) -> String {
        self.local.format("%H:%M:%S").to_string()
    }
}

/// A notification email ready to hand to a [`MailRelay`](super::MailRelay).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

impl LeadEmail {
    /// Build the operator notification for `lead`.
    pub fn compose(lead: &Lead, captured_at: DateTime<Utc>, from: &str, to: &str) -> Self {
        let when = CaptureTime::new(captured_at);

        Self {
            from: from.to_string(),
            to: to.to_string(),
            subject: format!("🎯 Novo Lead - {} | Landing Page Ordemo", lead.name),
            html: render_html(lead, &when),
            text: render_text(lead, &when),
        }
    }
}

fn render_text(lead: &Lead, when: &CaptureTime) -> String {
    format!(
        "Novo Lead - Landing Page (Pré-lançamento Ordemo)\n\
         \n\
         Nome: {name}\n\
         Telefone: {phone} ({whatsapp})\n\
         E-mail: {email}\n\
         \n\
         Data: {date}\n\
         Horário: {time}\n\
         \n\
         Este lead foi captado na Landing Page de pré-lançamento do Ordemo.\n",
        name = lead.name,
        phone = lead.phone,
        whatsapp = lead.phone.whatsapp_link(),
        email = lead.email,
        date = when.date(),
        time = when.time(),
    )
}

fn render_html(lead: &Lead, when: &CaptureTime) -> String {
    let name = escape_html(lead.name.as_str());
    let phone = escape_html(lead.phone.as_str());
    let email = escape_html(lead.email.as_str());

    format!(
        r##"<div style="font-family: 'Segoe UI', Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; background: #f8f9fa; border-radius: 12px;">
  <div style="background: linear-gradient(135deg, #162530 0%, #1e3a4a 100%); color: white; padding: 24px; border-radius: 12px 12px 0 0; text-align: center;">
    <h1 style="margin: 0; font-size: 24px; font-weight: 700;">🎯 Novo Lead - Landing Page</h1>
    <p style="margin: 8px 0 0; opacity: 0.9; font-size: 14px;">Pré-lançamento Ordemo</p>
  </div>
  <div style="background: white; padding: 24px; border-radius: 0 0 12px 12px; border: 1px solid #e2e8f0; border-top: none;">
    <h2 style="margin: 0 0 20px; color: #334155; font-size: 18px; border-bottom: 2px solid #2FBF71; padding-bottom: 10px;">Informações do Interessado</h2>
    <table style="width: 100%; border-collapse: collapse;">
      <tr>
        <td style="padding: 12px 0; color: #64748b; font-weight: 600; width: 120px;">Nome:</td>
        <td style="padding: 12px 0; color: #0f172a;">{name}</td>
      </tr>
      <tr>
        <td style="padding: 12px 0; color: #64748b; font-weight: 600;">Telefone:</td>
        <td style="padding: 12px 0;"><a href="{whatsapp}" style="color: #2FBF71; text-decoration: none;">{phone}</a></td>
      </tr>
      <tr>
        <td style="padding: 12px 0; color: #64748b; font-weight: 600;">E-mail:</td>
        <td style="padding: 12px 0;"><a href="mailto:{email}" style="color: #162530; text-decoration: none;">{email}</a></td>
      </tr>
    </table>
    <div style="margin-top: 24px; padding: 16px; background: #f8fafc; border-radius: 8px; border-left: 4px solid #2FBF71;">
      <p style="margin: 0; color: #64748b; font-size: 13px;">
        <strong>📅 Data:</strong> {date}<br>
        <strong>⏰ Horário:</strong> {time}
      </p>
    </div>
  </div>
  <p style="text-align: center; color: #94a3b8; font-size: 12px; margin-top: 20px;">Este lead foi captado na Landing Page de pré-lançamento do Ordemo.</p>
</div>"##,
        name = name,
        phone = phone,
        whatsapp = lead.phone.whatsapp_link(),
        email = email,
        date = when.date(),
        time = when.time(),
    )
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
