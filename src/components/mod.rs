//! UI components for the card.
//!
//! The navigation-facing pieces (indicator dots) plus the effect
//! collaborators: stateless, fire-and-forget visuals triggered by entry
//! pulses or their own lifecycle. None of them call back into the engine.

mod click_sparkles;
mod confetti;
mod message_bubble;
mod mouse_follower;
mod nav_dots;
mod particles;
mod party_popper;
mod ripple_button;
mod sparkles;
mod typewriter;

pub use click_sparkles::ClickSparkleLayer;
pub use confetti::ConfettiField;
pub use message_bubble::TapCard;
pub use mouse_follower::MouseFollower;
pub use nav_dots::NavDots;
pub use particles::FloatingParticles;
pub use party_popper::PartyPopper;
pub use ripple_button::RippleButton;
pub use sparkles::SparkleVeil;
pub use typewriter::Typewriter;
