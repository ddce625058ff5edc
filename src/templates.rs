use crate::domain::ContactMessage;
use tera::{Context, Tera};

lazy_static::lazy_static! {
    pub static ref TEMPLATES: Tera = {
        let mut tera = match Tera::new("templates/**/*") {
            Ok(t) => t,
            Err(e) => {
                println!("Parsing error(s): {}", e);
                ::std::process::exit(1);
            }
        };
        tera.autoescape_on(vec!["html"]);
        tera
    };
}

pub fn notification_html(message: &ContactMessage) -> Result<String, tera::Error> {
    let mut context = Context::new();
    context.insert("name", message.name.as_ref());
    context.insert("email", message.email.as_ref());
    context.insert("company", message.company.as_deref().unwrap_or("Not provided"));
    context.insert("message", message.message.as_ref());

    TEMPLATES.render("contact_email.html", &context)
}
