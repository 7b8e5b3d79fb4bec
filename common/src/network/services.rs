/// Label used for ports missing from the table.
pub const UNKNOWN_SERVICE: &str = "Unknown";

/// Well-known service name for a TCP port.
///
/// Total and deterministic: every port maps to a name or [`UNKNOWN_SERVICE`].
pub fn service_name(port: u16) -> &'static str {
    match port {
        21 => "FTP",
        22 => "SSH",
        23 => "Telnet",
        25 => "SMTP",
        53 => "DNS",
        80 => "HTTP",
        110 => "POP3",
        135 => "RPC",
        139 => "NetBIOS",
        143 => "IMAP",
        443 => "HTTPS",
        445 => "SMB",
        993 => "IMAPS",
        995 => "POP3S",
        1433 => "MSSQL",
        3306 => "MySQL",
        3389 => "RDP",
        5432 => "PostgreSQL",
        5900 => "VNC",
        8080 => "HTTP-Alt",
        _ => UNKNOWN_SERVICE,
    }
}
