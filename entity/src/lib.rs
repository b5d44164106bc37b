pub mod user;

/*
 A user record owns at most one session token. Login overwrites it, so there is
 never more than one live session per account. `password` always holds the
 argon2 digest, never the plaintext.
 */
