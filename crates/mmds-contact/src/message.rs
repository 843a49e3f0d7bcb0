use serde::Deserialize;

pub const SUBJECT: &str = "Yêu cầu tư vấn mới từ Website";
pub const DEFAULT_SERVICE: &str = "Không chọn dịch vụ cụ thể";

/// Fields of the public consultation form. Every field is optional on the
/// wire; missing ones are treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    /// Tax identification number (mã số thuế).
    pub mst: String,
}

/// A composed notification, ready for a [`crate::Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub subject: String,
    pub html: String,
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

impl ContactRequest {
    /// Renders the notification body. Every submitted value is escaped; the
    /// tax number line is left out when empty.
    pub fn compose(&self) -> ContactMessage {
        let service = if self.service.is_empty() {
            DEFAULT_SERVICE
        } else {
            self.service.as_str()
        };

        let mut html = String::from("<h2>Thông tin khách hàng đăng ký tư vấn:</h2>\n<ul>\n");
        let mut line = |label: &str, value: &str| {
            html.push_str(&format!(
                "  <li><strong>{label}:</strong> {}</li>\n",
                escape_html(value)
            ));
        };
        line("Họ và tên", &self.name);
        line("Số điện thoại", &self.phone);
        line("Email", &self.email);
        line("Dịch vụ quan tâm", service);
        if !self.mst.is_empty() {
            line("Mã số thuế", &self.mst);
        }
        html.push_str("</ul>\n");

        ContactMessage {
            subject: SUBJECT.to_string(),
            html,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Nguyễn Văn A".to_string(),
            phone: "0901234567".to_string(),
            email: "a@example.com".to_string(),
            service: "Chữ ký số".to_string(),
            mst: String::new(),
        }
    }

    #[test]
    fn composes_subject_and_fields() {
        let message = request().compose();

        assert_eq!(message.subject, SUBJECT);
        assert!(message.html.contains("<strong>Họ và tên:</strong> Nguyễn Văn A"));
        assert!(message.html.contains("<strong>Dịch vụ quan tâm:</strong> Chữ ký số"));
    }

    #[test]
    fn empty_tax_number_is_omitted() {
        assert!(!request().compose().html.contains("Mã số thuế"));

        let with_mst = ContactRequest {
            mst: "0312345678".to_string(),
            ..request()
        };
        assert!(with_mst.compose().html.contains("<strong>Mã số thuế:</strong> 0312345678"));
    }

    #[test]
    fn missing_service_uses_default() {
        let message = ContactRequest {
            service: String::new(),
            ..request()
        }
        .compose();

        assert!(message.html.contains(DEFAULT_SERVICE));
    }

    #[test]
    fn submitted_values_are_escaped() {
        let message = ContactRequest {
            name: "<script>alert('x')</script>".to_string(),
            ..request()
        }
        .compose();

        assert!(!message.html.contains("<script>"));
        assert!(message
            .html
            .contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }
}
