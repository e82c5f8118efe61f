pub mod responder_service;
