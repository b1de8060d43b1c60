mod comment;
mod photo;
