//! Text for the informational dialogs, composed from deck frontmatter.

use std::fmt::Write;

use crate::parser::{DeckMeta, PaymentInfo};

const DEFAULT_PAYMENT_TITLE: &str = "UPI Payment QR Code";
const DEFAULT_CTA: &str = "Thank you for your interest! We will be in touch shortly.";

const PAYMENT_STEPS: [&str; 4] = [
    "Scan the QR code with any UPI app (BHIM, PhonePe, Paytm, etc.)",
    "Verify the account details",
    "Enter the amount or use the pre-filled amount",
    "Complete the transaction",
];

pub fn payment_instructions(payment: &PaymentInfo) -> String {
    let title = payment.title.as_deref().unwrap_or(DEFAULT_PAYMENT_TITLE);
    let mut text = format!(
        "{title}\n\nAccount: {}\nUPI ID: {}",
        payment.account, payment.upi_id
    );
    if let Some(amount) = &payment.amount {
        let _ = write!(text, "\nAmount: {amount}");
    }
    if !payment.about.is_empty() {
        text.push_str("\n\nAbout:");
        for line in &payment.about {
            let _ = write!(text, "\n• {line}");
        }
    }
    text.push_str("\n\nInstructions:");
    for (i, step) in PAYMENT_STEPS.iter().enumerate() {
        let _ = write!(text, "\n{}. {step}", i + 1);
    }
    if let Some(note) = &payment.note {
        let _ = write!(text, "\n\n{note}");
    }
    text
}

pub fn upi_copied(payment: &PaymentInfo) -> String {
    format!(
        "UPI ID copied to clipboard: {}\n\n{}",
        payment.upi_id, payment.account
    )
}

/// Shown instead of [`upi_copied`] when the clipboard is unavailable.
pub fn upi_fallback(payment: &PaymentInfo) -> String {
    format!("UPI ID: {}\n\n{}", payment.upi_id, payment.account)
}

pub fn partnership(meta: &DeckMeta) -> Option<&str> {
    meta.partnership.as_deref().filter(|t| !t.trim().is_empty())
}

pub fn cta_acknowledgement(meta: &DeckMeta) -> &str {
    meta.cta
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(DEFAULT_CTA)
}
