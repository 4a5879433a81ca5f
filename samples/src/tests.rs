mod buffer;
mod samples;
