use std::io;
use crate::transport::structs::endpoints::Endpoints;

impl Endpoints {
    pub fn primary_port(&self) -> io::Result<u16> {
        Ok(self.primary.local_addr()?.port())
    }

    pub fn secondary_port(&self) -> io::Result<u16> {
        Ok(self.secondary.local_addr()?.port())
    }
}
