use bytes::Bytes;

use crate::domains::listings::models::{Body, Category, Fuel, Transmission};

/// A photo picked for upload: the original file name plus its content.
#[derive(Debug, Clone)]
pub struct PhotoFile {
    pub file_name: String,
    pub content: Bytes,
}

impl PhotoFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// One pending upload. Ordered inside a `PhotoSet`; the order becomes the
/// final `images` order, and index 0 is the cover. Created on selection,
/// mutated while uploading, discarded after a successful publish.
#[derive(Debug, Clone)]
pub struct UploadItem {
    pub file: PhotoFile,
    /// Local preview handle shown before the durable URL exists.
    pub preview: String,
    /// Upload progress percentage [0, 100].
    pub progress: u8,
    /// Durable retrieval URL once the upload completes.
    pub url: Option<String>,
}

impl UploadItem {
    pub fn new(file: PhotoFile) -> Self {
        let preview = format!("local://{}", file.file_name);
        Self {
            file,
            preview,
            progress: 0,
            url: None,
        }
    }
}

/// Step-1 form fields. Numeric fields keep the raw text entered so the
/// validation gates, not the form, decide what parses.
#[derive(Debug, Clone)]
pub struct VehicleForm {
    pub category: Category,
    pub make: String,
    pub model: String,
    pub year: String,
    pub mileage: String,
    pub fuel: Option<Fuel>,
    pub transmission: Option<Transmission>,
    pub body: Option<Body>,
    pub colour: String,
    pub description: String,
    pub price: String,
}

impl Default for VehicleForm {
    fn default() -> Self {
        Self {
            category: Category::Cars,
            make: String::new(),
            model: String::new(),
            year: String::new(),
            mileage: String::new(),
            fuel: None,
            transmission: None,
            body: None,
            colour: String::new(),
            description: String::new(),
            price: String::new(),
        }
    }
}

impl VehicleForm {
    /// Suggested advert title: "{year} {make} {model}", trimmed.
    pub fn title_suggestion(&self) -> String {
        let year = if self.year.is_empty() {
            String::new()
        } else {
            format!("{} ", self.year)
        };
        format!("{}{} {}", year, self.make, self.model)
            .trim()
            .to_string()
    }

    pub fn year_value(&self) -> Option<i32> {
        self.year.trim().parse().ok()
    }

    pub fn mileage_value(&self) -> Option<i32> {
        self.mileage.trim().parse().ok()
    }

    pub fn price_value(&self) -> Option<f64> {
        self.price.trim().parse().ok()
    }
}

/// Step-3 form fields. The postcode is kept private and never shown on the
/// advert.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub postcode: String,
}
