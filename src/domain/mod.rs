mod contact_email;
mod contact_message;
mod contact_name;
mod message_body;

pub use contact_email::ContactEmail;
pub use contact_message::{ContactMessage, REQUIRED_FIELDS_ERROR};
pub use contact_name::ContactName;
pub use message_body::MessageBody;
