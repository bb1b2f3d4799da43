use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub number: String,
}

impl Contact {
    pub fn new(name: &str, number: &str) -> Self {
        Contact {
            name: name.to_string(),
            number: number.to_string(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.number)
    }
}

// TEST
#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn display_renders_name_then_number() {
        let contact = Contact::new("John", "909-876-1234");

        assert_eq!(format!("{}", contact), "John: 909-876-1234");
    }

    #[test]
    fn contacts_compare_by_value() {
        let a = Contact::new("Amy", "111-222-3333");
        let b = Contact::new("Amy", "111-222-3333");
        let c = Contact::new("Amy", "222-333-1111");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
