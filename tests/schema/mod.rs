mod cascade;
mod migration;
mod scenario;
