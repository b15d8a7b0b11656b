// Textos fijos que ve el usuario.

pub const CUSTOMER_ADDED: &str = "¡Cliente agregado exitosamente!";
pub const SAVE_FAILED: &str = "Ocurrió un error al guardar el cliente. Inténtalo nuevamente.";

pub const CUSTOMER_UPDATED: &str = "Cliente actualizado correctamente";
pub const UPDATE_FAILED: &str = "No se pudo actualizar el cliente. Revisa el ID o intenta más tarde.";

pub const CUSTOMER_FOUND: &str = "Cliente encontrado.";
pub const CUSTOMER_NOT_FOUND: &str = "No se encontró un cliente con el ID proporcionado.";
pub const SEARCH_FAILED: &str = "Ocurrió un error al buscar el cliente. Intenta nuevamente.";

pub const CONFIRM_DELETE: &str = "¿Está seguro de eliminar este cliente?";
pub const CUSTOMER_DELETED: &str = "Cliente eliminado correctamente.";
pub const DELETE_FAILED: &str = "No se pudo eliminar el cliente. Revisa el ID o intenta más tarde.";

pub const LIST_FAILED: &str = "No se pudieron obtener los clientes. Intenta nuevamente más tarde.";

pub const INVALID_ID: &str = "Debe proporcionar un ID válido.";

pub const NAME_REQUIRED: &str = "El nombre es obligatorio.";
pub const SURNAME_REQUIRED: &str = "Los apellidos son obligatorios.";
