mod support;

mod cook_mode;
mod gamification;
mod messaging;
mod recipes;
