use core::fmt;

use crate::models::{Post, User};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Содержимое карточки записи, независимое от способа отрисовки.
pub struct Card {
    /// Заголовок карточки.
    pub heading: String,
    /// Строки под заголовком.
    pub lines: Vec<String>,
    /// Именованные блоки.
    pub sections: Vec<CardSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Именованный блок карточки.
pub struct CardSection {
    /// Заголовок блока.
    pub title: String,
    /// Строки блока.
    pub lines: Vec<String>,
}

/// Проекция записи в карточку.
pub trait CardView {
    /// Карточка записи; чистая функция без побочных эффектов.
    fn card(&self) -> Card;
}

impl CardView for User {
    fn card(&self) -> Card {
        let address = &self.address;
        let company = &self.company;

        Card {
            heading: self.name.clone(),
            lines: vec![
                format!("Username: {}", self.username),
                format!("Email: {}", self.email),
                format!("Phone: {}", self.phone),
                format!("Website: {}", self.website),
            ],
            sections: vec![
                CardSection {
                    title: "Address".to_string(),
                    lines: vec![
                        format!(
                            "{}, {}, {}, {}",
                            address.street, address.suite, address.city, address.zipcode
                        ),
                        format!("Geo: {}, {}", address.geo.lat, address.geo.lng),
                    ],
                },
                CardSection {
                    title: "Company".to_string(),
                    lines: vec![
                        company.name.clone(),
                        company.catch_phrase.clone(),
                        company.bs.clone(),
                    ],
                },
            ],
        }
    }
}

impl CardView for Post {
    fn card(&self) -> Card {
        Card {
            heading: self.title.clone(),
            lines: vec![self.body.clone(), format!("User ID: {}", self.owner_id)],
            sections: Vec::new(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        for line in &self.lines {
            writeln!(f, "  {line}")?;
        }
        for section in &self.sections {
            writeln!(f, "  {}:", section.title)?;
            for line in &section.lines {
                writeln!(f, "    {line}")?;
            }
        }
        Ok(())
    }
}
