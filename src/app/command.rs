use std::str::FromStr;
use thiserror::Error;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetSearchId(String),
    SetName(String),
    SetSurname(String),
    Save,
    Search,
    Update,
    Delete,
    List,
    Clear,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("no se indicó ningún comando")]
    Empty,
    #[error("comando desconocido '{0}'")]
    Unknown(String),
    #[error("'{0}' no admite un valor")]
    UnexpectedValue(String),
}

pub const HELP: &str = "\
Campos:
  id <valor>          Identificación a buscar
  nombre <valor>      Nombre
  apellidos <valor>   Apellidos
Botones:
  guardar             Crear cliente con nombre y apellidos
  buscar              Cargar el cliente del id en el formulario
  actualizar          Actualizar el cliente del id
  eliminar            Eliminar el cliente del id
  listar              Volver a cargar la tabla
  limpiar             Limpiar el formulario
Otros:
  ver | ayuda | salir";

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line.trim_end(), ""),
        };
        if keyword.is_empty() {
            return Err(CommandParseError::Empty);
        }

        let keyword = keyword.to_lowercase();
        // 欄位指令：其餘內容整行當作值，可為空
        match keyword.as_str() {
            "id" | "sid" => return Ok(Command::SetSearchId(rest.to_string())),
            "nombre" | "name" => return Ok(Command::SetName(rest.to_string())),
            "apellidos" | "surname" => return Ok(Command::SetSurname(rest.to_string())),
            _ => {}
        }

        let command = match keyword.as_str() {
            "guardar" | "save" => Command::Save,
            "buscar" | "search" | "find" => Command::Search,
            "actualizar" | "update" => Command::Update,
            "eliminar" | "delete" => Command::Delete,
            "listar" | "list" => Command::List,
            "limpiar" | "clear" => Command::Clear,
            "ver" | "show" => Command::Show,
            "ayuda" | "help" | "?" => Command::Help,
            "salir" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandParseError::Unknown(keyword)),
        };

        if !rest.is_empty() {
            return Err(CommandParseError::UnexpectedValue(keyword));
        }
        Ok(command)
    }
}
