mod config;
mod game;
mod navigation;
