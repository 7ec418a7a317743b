pub mod probe_responder;
