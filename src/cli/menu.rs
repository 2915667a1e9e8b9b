/// Menu line shown before every choice
pub const MENU_TEXT: &str =
    "Options: 1) Add Tool 2) Remove Tool 3) Update Tool 4) Generate Report 5) Exit";

/// Top-level menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTool,
    RemoveTool,
    UpdateTool,
    GenerateReport,
    Exit,
}

impl std::str::FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::AddTool),
            "2" => Ok(MenuChoice::RemoveTool),
            "3" => Ok(MenuChoice::UpdateTool),
            "4" => Ok(MenuChoice::GenerateReport),
            "5" => Ok(MenuChoice::Exit),
            other => Err(format!("Invalid menu choice: {}", other)),
        }
    }
}
