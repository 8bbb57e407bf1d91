// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Parser, Debug, Clone)]
#[command(name = "genz-dashboard", about = "GenZ career aspirations survey dashboard")]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, env = "DASHBOARD_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,
    #[arg(long, env = "DASHBOARD_PORT", default_value_t = 8050)]
    pub port: u16,
    /// Tokio worker threads serving requests.
    #[arg(long, env = "DASHBOARD_THREADS", default_value_t = 4,
          value_parser = clap::value_parser!(u16).range(1..))]
    pub threads: u16,
}
impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
    /// URLs to print at startup. A wildcard bind is reported as loopback
    /// plus the wildcard itself.
    pub fn reachable_urls(&self) -> Vec<String> {
        if self.host.is_unspecified() {
            vec![
                format!("http://{}", SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), self.port)),
                format!("http://{}", self.socket_addr()),
            ]
        } else {
            vec![format!("http://{}", self.socket_addr())]
        }
    }
}
