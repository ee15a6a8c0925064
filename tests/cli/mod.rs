mod compare;
mod logging;
mod merge;
mod misc;
mod samples;
mod show;
mod support;
