//! Regex field extractors for contact details and filename metadata

use regex::Regex;

pub const NOT_FOUND: &str = "Not Found";
pub const NOT_PROVIDED: &str = "Not Provided";
pub const UNKNOWN: &str = "Unknown";

/// Contact number, email and experience extraction. Each method returns the
/// first match verbatim or its sentinel.
pub struct FieldExtractor {
    phone_regex: Regex,
    email_regex: Regex,
    experience_regex: Regex,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor {
    pub fn new() -> Self {
        // Country code with a leading '+' may follow a non-word character,
        // so that branch is not anchored on a word boundary.
        let phone_regex = Regex::new(
            r"(?:\+\d{1,3}[-.\s]?|\b\d{1,3}[-.\s]?)?(?:\(\d{3}\)|\d{3})[-.\s]?\d{3}[-.\s]?\d{4}\b",
        )
        .expect("Invalid phone regex");

        let email_regex = Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .expect("Invalid email regex");

        let experience_regex = Regex::new(r"\[(\d+y_\d+m)\]").expect("Invalid experience regex");

        Self {
            phone_regex,
            email_regex,
            experience_regex,
        }
    }

    pub fn contact_number(&self, text: &str) -> String {
        self.phone_regex
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }

    pub fn email(&self, text: &str) -> String {
        self.email_regex
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }

    /// Experience only ever comes from the `[<y>y_<m>m]` filename tag; the
    /// document body is not consulted.
    pub fn experience(&self, filename: &str) -> String {
        self.experience_regex
            .captures(filename)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| NOT_PROVIDED.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_number_formats() {
        let fields = FieldExtractor::new();

        assert_eq!(fields.contact_number("Phone: +1 415-555-1234"), "+1 415-555-1234");
        assert_eq!(fields.contact_number("Call (415) 555-1234 today"), "(415) 555-1234");
        assert_eq!(fields.contact_number("415.555.1234"), "415.555.1234");
        assert_eq!(fields.contact_number("mobile 4155551234"), "4155551234");
        assert_eq!(fields.contact_number("Mobile: +919876543210"), "+919876543210");
        assert_eq!(fields.contact_number("Phone +14155551234"), "+14155551234");
        assert_eq!(fields.contact_number("Call 919876543210"), "919876543210");
        assert_eq!(fields.contact_number("+91 98765 432109"), NOT_FOUND);
        assert_eq!(fields.contact_number("no digits here"), NOT_FOUND);
    }

    #[test]
    fn test_contact_number_takes_first_occurrence() {
        let fields = FieldExtractor::new();
        let text = "Home 212-555-0000\nWork 646-555-1111";
        assert_eq!(fields.contact_number(text), "212-555-0000");
    }

    #[test]
    fn test_email() {
        let fields = FieldExtractor::new();

        assert_eq!(fields.email("Contact: a.b@example.com, or c@d.org"), "a.b@example.com");
        assert_eq!(fields.email("first_last+cv@mail.co.uk"), "first_last+cv@mail.co.uk");
        assert_eq!(fields.email("user@localhost"), NOT_FOUND);
        assert_eq!(fields.email(""), NOT_FOUND);
    }

    #[test]
    fn test_experience_from_filename_only() {
        let fields = FieldExtractor::new();

        assert_eq!(fields.experience("Naukri_JohnDoe_[3y_2m].pdf"), "3y_2m");
        assert_eq!(fields.experience("Naukri_JohnDoe_[10y_11m].docx"), "10y_11m");
        assert_eq!(fields.experience("resume_3y_2m.pdf"), NOT_PROVIDED);
        assert_eq!(fields.experience("resume.pdf"), NOT_PROVIDED);
    }
}
