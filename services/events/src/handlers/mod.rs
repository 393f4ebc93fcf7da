pub mod city;
pub mod event;
pub mod health;
