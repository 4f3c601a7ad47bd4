mod ipv4;
mod ipv6;
mod mixed;
