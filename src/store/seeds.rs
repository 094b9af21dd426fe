//! Default content written the first time a collection file is read.
//!
//! Seed ids are plain ordinals; generated records use UUIDs, so the two
//! can never collide.

use chrono::Utc;

use crate::models::{Commercial, ContactSubmission, Event, GalleryItem, Testimonial};

pub(super) fn events() -> Vec<Event> {
    let now = Utc::now().to_rfc3339();
    let event = |id: &str,
                 title: &str,
                 category: &str,
                 date: &str,
                 location: &str,
                 description: &str,
                 image: &str,
                 featured: bool| Event {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        date: date.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        featured,
        created_at: now.clone(),
        updated_at: now.clone(),
    };

    vec![
        event(
            "1",
            "Grand Corporate Gala 2024",
            "Corporate Events",
            "2024-03-15",
            "Colombo, Sri Lanka",
            "A spectacular corporate gathering featuring live entertainment, gourmet dining, and networking opportunities for over 500 guests.",
            "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800&h=600&fit=crop",
            true,
        ),
        event(
            "2",
            "Dream Wedding - Perera & Fernando",
            "Weddings",
            "2024-02-20",
            "Bentota, Sri Lanka",
            "An enchanting beachside wedding celebration with elegant decor, live music, and unforgettable moments.",
            "https://images.unsplash.com/photo-1519741497674-611481863552?w=800&h=600&fit=crop",
            true,
        ),
        event(
            "3",
            "Tech Summit Sri Lanka",
            "Conferences",
            "2024-01-10",
            "Kandy, Sri Lanka",
            "Leading technology conference bringing together innovators and industry leaders for knowledge sharing and collaboration.",
            "https://images.unsplash.com/photo-1475721027785-f74eccf877e2?w=800&h=600&fit=crop",
            false,
        ),
        event(
            "4",
            "Music Festival Night",
            "Concerts",
            "2024-04-20",
            "Galle, Sri Lanka",
            "An electrifying outdoor music festival featuring top local and international artists with state-of-the-art sound and lighting.",
            "https://images.unsplash.com/photo-1459749411175-04bf5292ceea?w=800&h=600&fit=crop",
            true,
        ),
        event(
            "5",
            "Product Launch - TechX",
            "Product Launches",
            "2024-05-15",
            "Colombo, Sri Lanka",
            "High-profile product launch event with theatrical reveal, immersive product demonstrations, and media coordination.",
            "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?w=800&h=600&fit=crop",
            true,
        ),
        event(
            "6",
            "Annual Awards Night",
            "Corporate Events",
            "2024-06-10",
            "Colombo, Sri Lanka",
            "Prestigious awards ceremony celebrating excellence with live performances, celebrity presenters, and gala dinner.",
            "https://images.unsplash.com/photo-1511795409834-ef04bbd61622?w=800&h=600&fit=crop",
            false,
        ),
    ]
}

pub(super) fn commercials() -> Vec<Commercial> {
    let now = Utc::now().to_rfc3339();
    let commercial = |id: &str,
                      title: &str,
                      category: &str,
                      client: &str,
                      thumbnail: &str,
                      video_url: &str,
                      description: &str,
                      duration: &str,
                      featured: bool| Commercial {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        client: client.to_string(),
        thumbnail: thumbnail.to_string(),
        video_url: video_url.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
        featured,
        created_at: now.clone(),
        updated_at: now.clone(),
    };

    vec![
        commercial(
            "1",
            "Nike Air Max Launch",
            "Product Launch",
            "Nike",
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=800&h=600&fit=crop",
            "https://www.youtube.com/watch?v=example1",
            "Cinematic product launch commercial showcasing the new Nike Air Max collection with dynamic visuals and high-energy editing.",
            "0:60",
            true,
        ),
        commercial(
            "2",
            "Luxury Watch Campaign",
            "Luxury",
            "Premium Brands",
            "https://images.unsplash.com/photo-1523170335258-f5ed11844a49?w=800&h=600&fit=crop",
            "https://www.youtube.com/watch?v=example2",
            "Elegant commercial highlighting the craftsmanship and timeless design of premium luxury timepieces.",
            "0:45",
            true,
        ),
        commercial(
            "3",
            "Automotive Excellence",
            "Automotive",
            "Auto Lanka",
            "https://images.unsplash.com/photo-1617654112368-307921291f42?w=800&h=600&fit=crop",
            "https://www.youtube.com/watch?v=example3",
            "Premium automotive commercial featuring stunning cinematography and cutting-edge visual effects.",
            "1:00",
            false,
        ),
        commercial(
            "4",
            "Fashion Brand Story",
            "Fashion",
            "Ceylon Fashion",
            "https://images.unsplash.com/photo-1445205170230-053b83016050?w=800&h=600&fit=crop",
            "https://www.youtube.com/watch?v=example4",
            "Creative brand story video blending fashion, art, and storytelling in a visually stunning narrative.",
            "2:00",
            true,
        ),
        commercial(
            "5",
            "Tech Innovation Reveal",
            "Technology",
            "Tech Corp",
            "https://images.unsplash.com/photo-1491933382434-500287f9b54b?w=800&h=600&fit=crop",
            "https://www.youtube.com/watch?v=example5",
            "Sleek product reveal video showcasing cutting-edge technology with minimalist aesthetic.",
            "0:90",
            false,
        ),
        commercial(
            "6",
            "Corporate Brand Film",
            "Corporate",
            "Lanka Holdings",
            "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=800&h=600&fit=crop",
            "https://www.youtube.com/watch?v=example6",
            "Professional corporate film communicating brand values and vision with cinematic quality.",
            "3:00",
            false,
        ),
    ]
}

pub(super) fn gallery() -> Vec<GalleryItem> {
    let now = Utc::now().to_rfc3339();
    let item = |id: &str, title: &str, category: &str, image: &str| GalleryItem {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        image: image.to_string(),
        description: None,
        created_at: now.clone(),
    };

    vec![
        item(
            "1",
            "Corporate Event Setup",
            "Events",
            "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800&h=600&fit=crop",
        ),
        item(
            "2",
            "Wedding Ceremony",
            "Weddings",
            "https://images.unsplash.com/photo-1519741497674-611481863552?w=800&h=600&fit=crop",
        ),
        item(
            "3",
            "Commercial Shoot",
            "Commercial",
            "https://images.unsplash.com/photo-1574717024653-61fd2cf4d44d?w=800&h=600&fit=crop",
        ),
        item(
            "4",
            "Concert Stage",
            "Concerts",
            "https://images.unsplash.com/photo-1459749411175-04bf5292ceea?w=800&h=600&fit=crop",
        ),
        item(
            "5",
            "Behind the Scenes",
            "Behind the Scenes",
            "https://images.unsplash.com/photo-1524178232363-1fb2b075b655?w=800&h=600&fit=crop",
        ),
        item(
            "6",
            "Product Photography",
            "Commercial",
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=800&h=600&fit=crop",
        ),
    ]
}

pub(super) fn testimonials() -> Vec<Testimonial> {
    let now = Utc::now().to_rfc3339();
    let testimonial = |id: &str, name: &str, role: &str, company: &str, content: &str| Testimonial {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        company: company.to_string(),
        content: content.to_string(),
        image: None,
        rating: 5,
        created_at: now.clone(),
    };

    vec![
        testimonial(
            "1",
            "Sarah Johnson",
            "CEO",
            "Tech Innovations Ltd",
            "Key Production transformed our annual conference into an unforgettable experience. Their attention to detail and creative vision exceeded all our expectations.",
        ),
        testimonial(
            "2",
            "Michael Chen",
            "Marketing Director",
            "Global Brands Co",
            "The commercial they produced for us was absolutely stunning. Professional team, incredible creativity, and delivered on time.",
        ),
        testimonial(
            "3",
            "Priya Fernando",
            "Bride",
            "",
            "Our wedding day was magical thanks to Key Production. Every detail was perfect, and the video they created brings tears to our eyes every time we watch it.",
        ),
    ]
}

pub(super) fn contacts() -> Vec<ContactSubmission> {
    Vec::new()
}
