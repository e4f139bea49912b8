use serde::{Deserialize, Serialize};

use crate::booking::BookingLink;

/// A hotel listing returned by a provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelResult {
    pub id: String,
    pub name: String,
    #[serde(alias = "city")]
    pub destination: String,
    pub rating: Option<f32>, // 0-10
    pub review_count: Option<u32>,
    pub price_total: Option<f64>,
    pub currency: Option<String>,
    pub image_url: Option<String>,
    pub summary: Option<String>,
    pub booking: BookingLink,
}

/// Immutable listing data a result is stamped from
struct HotelTemplate {
    id: &'static str,
    name: &'static str,
    rating: f32,
    review_count: u32,
    price_total: f64,
    currency: &'static str,
    image_url: &'static str,
    summary: &'static str,
}

const DEMO_CATALOG: [HotelTemplate; 2] = [
    HotelTemplate {
        id: "demo1",
        name: "Overgo Collection – Marina View",
        rating: 9.2,
        review_count: 1240,
        price_total: 320.0,
        currency: "USD",
        image_url: "https://images.unsplash.com/photo-1502920917128-1aa500764b8a",
        summary: "Design-forward boutique with spa & rooftop pool.",
    },
    HotelTemplate {
        id: "demo2",
        name: "Maison du Parc",
        rating: 8.9,
        review_count: 860,
        price_total: 240.0,
        currency: "USD",
        image_url: "https://images.unsplash.com/photo-1551776235-dde6d4829808",
        summary: "Quiet luxury near city gardens; perfect for couples.",
    },
];

impl HotelTemplate {
    fn stamp(&self, destination: &str, booking: &BookingLink) -> HotelResult {
        HotelResult {
            id: self.id.to_string(),
            name: self.name.to_string(),
            destination: destination.to_string(),
            rating: Some(self.rating),
            review_count: Some(self.review_count),
            price_total: Some(self.price_total),
            currency: Some(self.currency.to_string()),
            image_url: Some(self.image_url.to_string()),
            summary: Some(self.summary.to_string()),
            booking: booking.clone(),
        }
    }
}

/// The fixed demo listings, relocated to `destination`. Budget, amenities
/// and sort order are not applied.
pub fn demo_catalog(destination: &str, booking: &BookingLink) -> Vec<HotelResult> {
    DEMO_CATALOG
        .iter()
        .map(|template| template.stamp(destination, booking))
        .collect()
}
