//! # Course Content Types
//!
//! The promotional content structure served by `GET /api/course/info`:
//! product pricing, hero copy, stats, benefits, syllabus, bonuses,
//! instructor bio, offers, and testimonials. The client only reads this;
//! rendering is the host page's concern.

use serde::{Deserialize, Serialize};

/// Full course content structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseInfo {
    pub product: ProductInfo,
    pub hero: HeroSection,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub benefits: Vec<Benefit>,
    #[serde(default)]
    pub course_content: Vec<CourseModule>,
    #[serde(default)]
    pub bonuses: Vec<Bonus>,
    pub instructor: Instructor,
    #[serde(default)]
    pub offers: Vec<Offer>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

/// Product name and pricing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInfo {
    pub name: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Current price in major units (e.g., 297.00)
    pub price: f64,
    /// Struck-through anchor price
    #[serde(default)]
    pub old_price: Option<f64>,
    /// ISO 4217 code (e.g., "BRL")
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroSection {
    #[serde(default)]
    pub announcement: Option<String>,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Benefit {
    pub title: String,
    pub description: String,
}

/// One syllabus entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseModule {
    #[serde(default)]
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bonus {
    #[serde(default)]
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// A promotional offer block; `included` and `benefits` are alternative
/// bullet lists and either may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub highlight: Option<String>,
    #[serde(default)]
    pub urgency: Option<String>,
    #[serde(default)]
    pub included: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    pub text: String,
    #[serde(default)]
    pub rating: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_info_parsing() {
        let body = serde_json::json!({
            "product": {
                "name": "VAGA BLINDADA ROV",
                "subtitle": "Curso Completo de Operador ROV",
                "price": 297.00,
                "old_price": 597.00,
                "currency": "BRL"
            },
            "hero": {
                "announcement": "ÚLTIMAS VAGAS DISPONÍVEIS",
                "title": "VAGA BLINDADA ROV",
                "subtitle": "Torne-se um Operador ROV Certificado",
                "video_url": "https://video.example/intro"
            },
            "stats": [{"number": "95%", "label": "Taxa de Empregabilidade"}],
            "benefits": [{"title": "Certificação", "description": "Reconhecida mundialmente"}],
            "course_content": [{"icon": "🤖", "title": "Fundamentos de ROV", "description": "História e tipos"}],
            "bonuses": [{"icon": "📚", "title": "E-book", "description": "Manual completo"}],
            "instructor": {
                "name": "Eng. Carlos Marinho",
                "bio": "15 anos offshore",
                "experience": "Ex-Petrobras",
                "photo": "https://img.example/c.jpg"
            },
            "offers": [
                {
                    "title": "OFERTA ESPECIAL",
                    "subtitle": "De R$ 597 por R$ 297",
                    "highlight": "ECONOMIA DE R$ 300",
                    "urgency": "Apenas 24 horas",
                    "included": ["Curso Completo", "Certificação"]
                },
                {
                    "title": "ÚLTIMO DIA",
                    "benefits": ["Economia imediata"]
                }
            ],
            "testimonials": [
                {"name": "João Silva", "role": "Operador ROV", "text": "Curso completo demais!", "rating": 5}
            ]
        });

        let info: CourseInfo = serde_json::from_value(body).unwrap();
        assert_eq!(info.product.price, 297.00);
        assert_eq!(info.product.old_price, Some(597.00));
        assert_eq!(info.offers.len(), 2);
        assert_eq!(info.offers[0].included.len(), 2);
        assert!(info.offers[1].included.is_empty());
        assert_eq!(info.testimonials[0].rating, Some(5));
    }

    #[test]
    fn test_minimal_course_info() {
        let body = serde_json::json!({
            "product": {"name": "ROV", "price": 100.0, "currency": "BRL"},
            "hero": {"title": "ROV"},
            "instructor": {"name": "Carlos"}
        });

        let info: CourseInfo = serde_json::from_value(body).unwrap();
        assert!(info.stats.is_empty());
        assert!(info.hero.video_url.is_none());
    }
}
