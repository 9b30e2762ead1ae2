use crate::domain::model::NewProgram;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Programs loaded into a fresh store so the read endpoints are never empty.
pub fn sample_programs() -> Vec<NewProgram> {
    vec![
        NewProgram {
            destination: "Tokyo, Japan".to_string(),
            country: "Japan".to_string(),
            title: "Tokyo Summer Language & Culture Immersion".to_string(),
            description: "Experience the perfect blend of language learning and cultural immersion in the heart of Tokyo. Study Japanese in small classes while exploring ancient temples, modern technology hubs, and traditional cuisine.".to_string(),
            duration: "4 weeks".to_string(),
            start_date: "July 2025".to_string(),
            end_date: "August 2025".to_string(),
            price: 4500,
            level: "High School & College".to_string(),
            highlights: strings(&[
                "20 hours/week intensive Japanese language classes",
                "Cultural activities: tea ceremony, calligraphy, cooking classes",
                "Visits to Tokyo Tower, Senso-ji Temple, and Akihabara",
                "Host family accommodation for authentic experience",
                "Weekend trips to Mt. Fuji and Kyoto",
            ]),
            image_url: "@assets/generated_images/Students_in_Tokyo_hero_366c34fa.png".to_string(),
            featured: Some(true),
            spots_available: 12,
        },
        NewProgram {
            destination: "Seoul, South Korea".to_string(),
            country: "South Korea".to_string(),
            title: "Seoul K-Culture & Business Program".to_string(),
            description: "Dive into South Korea's dynamic culture and booming economy. Combine Korean language study with business workshops, K-pop culture experiences, and tech industry visits in one of Asia's most exciting cities.".to_string(),
            duration: "6 weeks".to_string(),
            start_date: "June 2025".to_string(),
            end_date: "August 2025".to_string(),
            price: 5200,
            level: "College & 18+".to_string(),
            highlights: strings(&[
                "Korean language courses (beginner to advanced)",
                "Business workshops at leading Seoul companies",
                "K-pop dance classes and studio tours",
                "Tech startup incubator visits in Gangnam",
                "Weekend trips to DMZ and Busan",
            ]),
            image_url: "@assets/generated_images/Students_in_Korea_hero_f1ab5dd2.png".to_string(),
            featured: Some(true),
            spots_available: 15,
        },
        NewProgram {
            destination: "Barcelona, Spain".to_string(),
            country: "Spain".to_string(),
            title: "Barcelona Arts & Spanish Language".to_string(),
            description: "Immerse yourself in Spanish language and Mediterranean culture in vibrant Barcelona. Study Spanish while exploring Gaudí's architecture, Mediterranean beaches, and world-class museums.".to_string(),
            duration: "8 weeks".to_string(),
            start_date: "June 2025".to_string(),
            end_date: "August 2025".to_string(),
            price: 5800,
            level: "High School & College".to_string(),
            highlights: strings(&[
                "Intensive Spanish language instruction",
                "Art history classes at MACBA and Picasso Museum",
                "Cooking classes: paella, tapas, and Catalan cuisine",
                "Beach volleyball and Mediterranean activities",
                "Day trips to Montserrat and Costa Brava",
            ]),
            image_url: "@assets/generated_images/Students_studying_together_hero_65ed8f9a.png".to_string(),
            featured: Some(true),
            spots_available: 18,
        },
        NewProgram {
            destination: "Paris, France".to_string(),
            country: "France".to_string(),
            title: "Paris Language & Fashion Design".to_string(),
            description: "Study French in the city of lights while exploring fashion, art, and cuisine. Perfect for students interested in design, culinary arts, or French culture.".to_string(),
            duration: "5 weeks".to_string(),
            start_date: "July 2025".to_string(),
            end_date: "August 2025".to_string(),
            price: 6200,
            level: "College & 18+".to_string(),
            highlights: strings(&[
                "French language courses at Sorbonne partner school",
                "Fashion design workshops in Le Marais",
                "Visits to Louvre, Musée d'Orsay, and Versailles",
                "French cooking classes with professional chefs",
                "Student apartment accommodation in Latin Quarter",
            ]),
            image_url: "@assets/generated_images/Students_studying_together_hero_65ed8f9a.png".to_string(),
            featured: Some(false),
            spots_available: 10,
        },
    ]
}
