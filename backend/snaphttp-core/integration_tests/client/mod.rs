mod blocking;
mod status_line;
