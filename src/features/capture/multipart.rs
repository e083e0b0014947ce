//! Transport-independent description of a capture upload. The browser client
//! turns it into a `FormData`; tests inspect it directly.

pub const IMAGE_FIELD: &str = "image";
pub const IMAGE_FILENAME: &str = "face.jpg";
pub const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

#[derive(Clone, PartialEq, Eq)]
pub enum Part {
    File {
        name: String,
        filename: String,
        content_type: String,
        bytes: Vec<u8>,
    },
    Text {
        name: String,
        value: String,
    },
}

impl std::fmt::Debug for Part {
    // Frame bytes and field values stay out of logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Part::File {
                name,
                filename,
                bytes,
                ..
            } => write!(f, "File({name}, {filename}, {} bytes)", bytes.len()),
            Part::Text { name, .. } => write!(f, "Text({name})"),
        }
    }
}

/// Ordered multipart body: the image part first, then one text part per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<Part>,
}

impl MultipartForm {
    /// Builds the capture upload for a JPEG frame and its form fields.
    pub fn capture(jpeg: Vec<u8>, fields: &[(String, String)]) -> Self {
        let mut form = Self::default();
        form.parts.push(Part::File {
            name: IMAGE_FIELD.to_string(),
            filename: IMAGE_FILENAME.to_string(),
            content_type: IMAGE_CONTENT_TYPE.to_string(),
            bytes: jpeg,
        });
        for (name, value) in fields {
            form.parts.push(Part::Text {
                name: name.clone(),
                value: value.clone(),
            });
        }
        form
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Value of the first text part called `name`.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            Part::Text { name: key, value } if key == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Bytes of the image part.
    pub fn image(&self) -> Option<&[u8]> {
        self.parts.iter().find_map(|part| match part {
            Part::File { name, bytes, .. } if name == IMAGE_FIELD => Some(bytes.as_slice()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> Vec<(String, String)> {
        [
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("gender", "female"),
            ("dob", "1990-12-10"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn image_part_comes_first_with_fixed_filename() {
        let form = MultipartForm::capture(vec![0xFF, 0xD8, 0xFF], &[]);
        assert_eq!(form.parts().len(), 1);
        match &form.parts()[0] {
            Part::File {
                name,
                filename,
                content_type,
                bytes,
            } => {
                assert_eq!(name, "image");
                assert_eq!(filename, "face.jpg");
                assert_eq!(content_type, "image/jpeg");
                assert_eq!(bytes, &vec![0xFF, 0xD8, 0xFF]);
            }
            other => panic!("unexpected first part {other:?}"),
        }
    }

    #[test]
    fn fields_follow_in_order() {
        let form = MultipartForm::capture(vec![1], &fields());
        let names: Vec<&str> = form
            .parts()
            .iter()
            .map(|part| match part {
                Part::File { name, .. } | Part::Text { name, .. } => name.as_str(),
            })
            .collect();
        assert_eq!(names, ["image", "name", "email", "gender", "dob"]);
        assert_eq!(form.text("email"), Some("ada@example.com"));
        assert_eq!(form.image(), Some(&[1u8][..]));
    }

    #[test]
    fn debug_hides_payloads() {
        let form = MultipartForm::capture(vec![1, 2, 3], &fields());
        let rendered = format!("{form:?}");
        assert!(rendered.contains("3 bytes"));
        assert!(!rendered.contains("ada@example.com"));
    }
}
