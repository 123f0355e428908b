mod event;
mod report;
