use serde::Serialize;

use super::{Artwork, Category};

fn artwork(
    id: &str,
    title: &str,
    category: Category,
    price: u32,
    image: &str,
    description: &str,
    delivery_time: &str,
) -> Artwork {
    Artwork {
        id: id.to_owned(),
        title: title.to_owned(),
        category,
        price,
        image: image.to_owned(),
        description: description.to_owned(),
        delivery_time: delivery_time.to_owned(),
    }
}

pub fn artwork_seed() -> Vec<Artwork> {
    vec![
        artwork(
            "family-portrait-premium",
            "Family Portrait",
            Category::Family,
            1500,
            "assets/family-portrait-1.jpg",
            "Beautiful family portrait capturing love and togetherness. Perfect for your living room.",
            "7-10 days",
        ),
        artwork(
            "baby-portrait-classic",
            "Baby Portrait",
            Category::Baby,
            800,
            "assets/baby-portrait-1.jpg",
            "Adorable baby portrait preserving those precious early moments forever.",
            "5-7 days",
        ),
        artwork(
            "couple-portrait-romantic",
            "Couple Portrait",
            Category::Couple,
            1000,
            "assets/couple-portrait-1.jpg",
            "Romantic couple portrait celebrating your love story in pencil art.",
            "7-10 days",
        ),
        artwork(
            "single-portrait-professional",
            "Single Portrait",
            Category::Single,
            500,
            "assets/single-portrait-1.jpg",
            "Professional single portrait perfect for gifting or personal collection.",
            "5-7 days",
        ),
        artwork(
            "wall-painting-nature",
            "Wall Painting",
            Category::WallArt,
            800,
            "assets/wall-art-1.jpg",
            "Beautiful wall painting to transform your space with artistic nature themes.",
            "10-15 days",
        ),
        artwork(
            "color-pencil-landscape",
            "Color Pencil Artwork",
            Category::ColorArt,
            700,
            "assets/wall-art-1.jpg",
            "Vibrant color pencil artwork bringing landscapes to life.",
            "7-10 days",
        ),
    ]
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub review: &'static str,
    pub rating: u8,
    pub location: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Priya Kumar",
        review: "Vimal captured our family perfectly! The attention to detail is incredible.",
        rating: 5,
        location: "Chennai",
    },
    Testimonial {
        name: "Rajesh Sharma",
        review: "Amazing wall painting for our home. Exceeded all expectations!",
        rating: 5,
        location: "Coimbatore",
    },
    Testimonial {
        name: "Meera Patel",
        review: "Beautiful baby portrait. Vimal truly has a gift for capturing emotions.",
        rating: 5,
        location: "Madurai",
    },
];
