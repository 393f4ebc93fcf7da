pub mod city;
pub mod event;
pub mod user_details;
