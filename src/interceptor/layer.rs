use crate::exception::HttpException;
use crate::interceptor::{Interceptor, InterceptorFuture, Next};
use axum::{body::Body, http::Request, response::IntoResponse, response::Response};
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Tower Layer running a chain of interceptors around the inner service.
///
/// Interceptors run in the order they were given: the first one sees the
/// request first and the response last.
#[derive(Clone)]
pub struct InterceptorLayer {
    interceptors: Arc<Vec<Arc<dyn Interceptor>>>,
}

impl InterceptorLayer {
    pub fn new(interceptors: Vec<Arc<dyn Interceptor>>) -> Self {
        Self {
            interceptors: Arc::new(interceptors),
        }
    }
}

impl<S> Layer<S> for InterceptorLayer {
    type Service = InterceptorMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        InterceptorMiddleware {
            inner,
            interceptors: self.interceptors.clone(),
        }
    }
}

#[derive(Clone)]
pub struct InterceptorMiddleware<S> {
    inner: S,
    interceptors: Arc<Vec<Arc<dyn Interceptor>>>,
}

impl<S> Service<Request<Body>> for InterceptorMiddleware<S>
where
    S: Service<Request<Body>, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let interceptors = self.interceptors.clone();
        // take the instance that was driven to readiness
        let clone = self.inner.clone();
        let inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let mut chain = Next::new(move |req| {
                let fut: InterceptorFuture = Box::pin(async move {
                    let mut inner = inner;
                    match inner.call(req).await {
                        Ok(response) => Ok(response),
                        Err(never) => match never {},
                    }
                });
                fut
            });

            for interceptor in interceptors.iter().rev() {
                let interceptor = Arc::clone(interceptor);
                let next = chain;
                chain = Next::new(move |req| {
                    let fut: InterceptorFuture =
                        Box::pin(async move { interceptor.intercept(req, next).await });
                    fut
                });
            }

            let response = chain.run(request).await.unwrap_or_else(|e| {
                HttpException::Internal(format!("interceptor failed: {}", e)).into_response()
            });
            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interceptor::InterceptorResult;
    use async_trait::async_trait;
    use axum::{Router, http::StatusCode, routing::get};
    use std::sync::Mutex;
    use tower::ServiceExt;

    struct Recorder {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Interceptor for Recorder {
        async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult {
            self.log.lock().unwrap().push(format!("{} before", self.name));
            let response = next.run(request).await?;
            self.log.lock().unwrap().push(format!("{} after", self.name));
            Ok(response)
        }
    }

    struct Refuse;

    #[async_trait]
    impl Interceptor for Refuse {
        async fn intercept(&self, _request: Request<Body>, _next: Next) -> InterceptorResult {
            Err("refused".into())
        }
    }

    #[tokio::test]
    async fn test_interceptors_run_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let layer = InterceptorLayer::new(vec![
            Arc::new(Recorder { name: "outer", log: log.clone() }) as Arc<dyn Interceptor>,
            Arc::new(Recorder { name: "inner", log: log.clone() }) as Arc<dyn Interceptor>,
        ]);
        let app = Router::new().route("/", get(|| async { "ok" })).layer(layer);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            *log.lock().unwrap(),
            vec!["outer before", "inner before", "inner after", "outer after"]
        );
    }

    #[tokio::test]
    async fn test_interceptor_error_becomes_internal_error() {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(InterceptorLayer::new(vec![Arc::new(Refuse) as Arc<dyn Interceptor>]));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
