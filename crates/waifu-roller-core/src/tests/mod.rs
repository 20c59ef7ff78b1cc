mod gate;
mod keystrokes;
mod locator;
