pub mod content;
pub mod game;
pub mod messaging;
pub mod notification;
pub mod payment;
pub mod profile;
pub mod social;
pub mod social_auth;
pub mod subscription;
pub mod user;
