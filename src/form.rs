// Create Dish form: field editing and caller-side validation
// Nothing reaches the store until every field checks out

use thiserror::Error;

use crate::store::{Course, NewMenuItem, Price, PriceError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Dish name cannot be empty")]
    EmptyName,
    #[error("Description cannot be empty")]
    EmptyDescription,
    #[error("Price cannot be empty")]
    EmptyPrice,
    #[error("Price '{0}' must use digits with an optional decimal point, e.g. 12.50")]
    InvalidPrice(String),
    #[error("Price must be greater than zero")]
    NonPositivePrice,
}

/// Form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Course,
    Price,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Description,
        FormField::Course,
        FormField::Price,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "DISH NAME",
            FormField::Description => "DESCRIPTION",
            FormField::Course => "COURSE TYPE",
            FormField::Price => "PRICE",
        }
    }

    fn position(self) -> usize {
        FormField::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> FormField {
        FormField::ALL[(self.position() + 1) % FormField::ALL.len()]
    }

    pub fn previous(self) -> FormField {
        FormField::ALL[(self.position() + FormField::ALL.len() - 1) % FormField::ALL.len()]
    }
}

#[derive(Debug, Clone)]
pub struct DishForm {
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: String,
    pub focus: FormField,
    /// Message from the last rejected submit
    pub error: Option<FormError>,
    default_course: Course,
}

impl DishForm {
    pub fn new(default_course: Course) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            course: default_course,
            price: String::new(),
            focus: FormField::Name,
            error: None,
            default_course,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.default_course);
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn next_course(&mut self) {
        self.course = self.course.next();
    }

    pub fn previous_course(&mut self) {
        self.course = self.course.previous();
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::Price => Some(&mut self.price),
            FormField::Course => None,
        }
    }

    /// Type a character into the focused text field
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if let Some(text) = self.focused_text_mut() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    /// Insert pasted text; line breaks become spaces, other control characters are dropped
    pub fn paste(&mut self, pasted: &str) {
        let cleaned: String = pasted
            .chars()
            .map(|c| if c == '\n' || c == '\r' || c == '\t' { ' ' } else { c })
            .filter(|c| !c.is_control())
            .collect();
        if let Some(text) = self.focused_text_mut() {
            text.push_str(&cleaned);
        }
    }

    /// Check every field and build the trimmed dish
    pub fn validate(&self) -> Result<NewMenuItem, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::EmptyDescription);
        }

        let price = parse_price(&self.price)?;

        Ok(NewMenuItem::new(name, description, self.course, price))
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validate; on success the form resets for the next dish
    pub fn submit(&mut self) -> Result<NewMenuItem, FormError> {
        match self.validate() {
            Ok(item) => {
                self.reset();
                Ok(item)
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }
}

fn parse_price(text: &str) -> Result<Price, FormError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(FormError::EmptyPrice);
    }

    // A negative number is a number, just not an acceptable one
    if let Some(magnitude) = text.strip_prefix('-') {
        return match magnitude.parse::<Price>() {
            Ok(_) => Err(FormError::NonPositivePrice),
            Err(_) => Err(FormError::InvalidPrice(text.to_string())),
        };
    }

    match text.parse::<Price>() {
        Ok(price) if price == Price::ZERO => Err(FormError::NonPositivePrice),
        Ok(price) => Ok(price),
        Err(PriceError::Malformed(_)) | Err(PriceError::OutOfRange(_)) => {
            Err(FormError::InvalidPrice(text.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, description: &str, price: &str) -> DishForm {
        let mut form = DishForm::new(Course::MainCourses);
        form.name = name.to_string();
        form.description = description.to_string();
        form.price = price.to_string();
        form
    }

    #[test]
    fn test_valid_form_builds_trimmed_item() {
        let form = filled("  Risotto ", " Creamy rice  ", " 18.5 ");
        let item = form.validate().unwrap();
        assert_eq!(item.name, "Risotto");
        assert_eq!(item.description, "Creamy rice");
        assert_eq!(item.course, Course::MainCourses);
        assert_eq!(item.price.to_string(), "18.50");
    }

    #[test]
    fn test_empty_fields_rejected_in_order() {
        assert_eq!(
            filled("   ", "x", "1").validate(),
            Err(FormError::EmptyName)
        );
        assert_eq!(
            filled("a", "", "1").validate(),
            Err(FormError::EmptyDescription)
        );
        assert_eq!(filled("a", "b", "  ").validate(), Err(FormError::EmptyPrice));
    }

    #[test]
    fn test_price_must_be_positive_number() {
        assert_eq!(
            filled("a", "b", "abc").validate(),
            Err(FormError::InvalidPrice("abc".to_string()))
        );
        assert_eq!(
            filled("a", "b", "-4.00").validate(),
            Err(FormError::NonPositivePrice)
        );
        assert_eq!(
            filled("a", "b", "0").validate(),
            Err(FormError::NonPositivePrice)
        );
        assert_eq!(
            filled("a", "b", "0.001").validate(),
            Err(FormError::NonPositivePrice)
        );
        assert_eq!(
            filled("a", "b", "-x").validate(),
            Err(FormError::InvalidPrice("-x".to_string()))
        );
        assert!(filled("a", "b", "0.01").is_valid());
    }

    #[test]
    fn test_price_accepts_plain_decimals_only() {
        for text in ["1e3", "12abc", "1,50", "$5"] {
            assert_eq!(
                filled("a", "b", text).validate(),
                Err(FormError::InvalidPrice(text.to_string())),
                "{} should be rejected",
                text
            );
        }
        let message = FormError::InvalidPrice("1e3".to_string()).to_string();
        assert!(message.contains("digits"));
    }

    #[test]
    fn test_submit_resets_only_on_success() {
        let mut form = filled("Tart", "Lemon tart", "");
        form.course = Course::Desserts;

        assert_eq!(form.submit(), Err(FormError::EmptyPrice));
        assert_eq!(form.name, "Tart");
        assert_eq!(form.error, Some(FormError::EmptyPrice));

        form.price = "6".to_string();
        let item = form.submit().unwrap();
        assert_eq!(item.course, Course::Desserts);
        assert!(form.name.is_empty());
        assert!(form.price.is_empty());
        assert_eq!(form.course, Course::MainCourses);
        assert_eq!(form.error, None);
        assert_eq!(form.focus, FormField::Name);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = DishForm::new(Course::Appetizers);
        form.insert_char('S');
        form.insert_char('o');
        form.focus_next();
        form.insert_char('H');
        form.focus_next();
        // Course field ignores text
        form.insert_char('x');
        form.next_course();
        form.focus_next();
        form.insert_char('9');
        form.backspace();
        form.insert_char('7');

        assert_eq!(form.name, "So");
        assert_eq!(form.description, "H");
        assert_eq!(form.course, Course::MainCourses);
        assert_eq!(form.price, "7");

        form.focus_next();
        assert_eq!(form.focus, FormField::Name);
        form.focus_previous();
        assert_eq!(form.focus, FormField::Price);
    }

    #[test]
    fn test_paste_flattens_line_breaks() {
        let mut form = DishForm::new(Course::Appetizers);
        form.focus = FormField::Description;
        form.paste("Line one\r\nline two\u{7}");
        assert_eq!(form.description, "Line one  line two");

        form.focus = FormField::Course;
        form.paste("ignored");
        assert_eq!(form.course, Course::Appetizers);
    }
}
