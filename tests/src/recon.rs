mod banner;
mod ports;
mod subdomains;
mod sweep;
