use netctl_core::NetworkResource;

pub struct TableFormatter {
    id_width: usize,
    name_width: usize,
    driver_width: usize,
    scope_width: usize,
}

impl TableFormatter {
    pub fn new(networks: &[NetworkResource]) -> Self {
        let name_width = networks
            .iter()
            .map(|n| n.name.chars().count())
            .max()
            .unwrap_or(16)
            .clamp(4, 40); // Between "Name" header min and reasonable terminal width max

        let driver_width = networks
            .iter()
            .map(|n| n.driver.chars().count())
            .max()
            .unwrap_or(6)
            .clamp(6, 16);

        Self {
            id_width: 12,
            name_width,
            driver_width,
            scope_width: 6,
        }
    }

    pub fn render(&self, networks: &[NetworkResource]) -> Vec<String> {
        let mut lines = vec![self.top_border(), self.header_row(), self.separator()];
        lines.extend(networks.iter().map(|n| self.row(n)));
        lines.push(self.bottom_border());
        lines
    }

    pub fn print_table(&self, networks: &[NetworkResource]) {
        for line in self.render(networks) {
            println!("{}", line);
        }
    }

    fn row(&self, network: &NetworkResource) -> String {
        format!(
            "│ {} │ {} │ {} │ {} │",
            truncate(network.short_id(), self.id_width),
            truncate(&network.name, self.name_width),
            truncate(&network.driver, self.driver_width),
            truncate(&network.scope, self.scope_width),
        )
    }

    fn header_row(&self) -> String {
        format!(
            "│ {} │ {} │ {} │ {} │",
            truncate("Network ID", self.id_width),
            truncate("Name", self.name_width),
            truncate("Driver", self.driver_width),
            truncate("Scope", self.scope_width),
        )
    }

    fn border(&self, left: &str, mid: &str, right: &str) -> String {
        let cells: Vec<String> = [
            self.id_width,
            self.name_width,
            self.driver_width,
            self.scope_width,
        ]
        .iter()
        .map(|w| "─".repeat(w + 2))
        .collect();
        format!("{}{}{}", left, cells.join(mid), right)
    }

    fn top_border(&self) -> String {
        self.border("┌", "┬", "┐")
    }

    fn separator(&self) -> String {
        self.border("├", "┼", "┤")
    }

    fn bottom_border(&self) -> String {
        self.border("└", "┴", "┘")
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
