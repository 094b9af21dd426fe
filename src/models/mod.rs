pub mod commercial;
pub mod contact;
pub mod event;
pub mod gallery;
pub mod testimonial;

pub use commercial::{Commercial, CommercialPatch, NewCommercial};
pub use contact::{ContactSubmission, NewContactSubmission};
pub use event::{Event, EventPatch, NewEvent};
pub use gallery::{GalleryItem, NewGalleryItem};
pub use testimonial::{NewTestimonial, Testimonial, TestimonialPatch};

/// A persisted record addressable by its string id.
pub trait Record {
    fn id(&self) -> &str;
}
