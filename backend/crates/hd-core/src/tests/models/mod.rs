mod identity_projection;
mod role;
mod user;
