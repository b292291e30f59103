mod comments;
mod credentials;
mod navbar;
mod prompts;

pub use self::{comments::*, credentials::*, navbar::*, prompts::*};
